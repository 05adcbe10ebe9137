pub(crate) mod canvas;
