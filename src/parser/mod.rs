pub(crate) mod gld;
