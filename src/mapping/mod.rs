pub(crate) mod keyed_mapping;
