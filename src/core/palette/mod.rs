pub mod table;

pub use table::{PaletteError, PaletteTable};
