/// Floating-point width used by the escape-time recurrence.
///
/// Single precision matches the compute-backend default and is enough until
/// deep zooms, where the image degrades into banding; double pushes that
/// point further out at roughly twice the arithmetic cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    #[default]
    Single,
    Double,
}
