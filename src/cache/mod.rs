pub(crate) mod structural;
