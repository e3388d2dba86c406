pub(crate) mod line;
pub(crate) mod sprite;
pub(crate) mod text;
