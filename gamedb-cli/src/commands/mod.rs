pub(crate) mod minify;
