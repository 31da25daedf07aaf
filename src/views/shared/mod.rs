mod form_field;
mod inputs;

pub use form_field::*;
pub use inputs::*;
