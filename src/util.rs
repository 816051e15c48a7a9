pub(crate) mod complex;

#[cfg(test)]
pub(crate) mod testing;
