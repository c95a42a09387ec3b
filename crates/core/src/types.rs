/// Contact primary keys, assigned by the backing store.
pub type DbId = i64;
