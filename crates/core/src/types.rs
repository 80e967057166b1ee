/// `asset_types.id` is a PostgreSQL BIGSERIAL.
pub type DbId = i64;
