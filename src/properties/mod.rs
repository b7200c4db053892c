pub(crate) mod constants;
pub(crate) mod structures;
pub(crate) mod text;
pub(crate) mod value;
