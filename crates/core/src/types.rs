/// Local primary keys are SQLite `INTEGER PRIMARY KEY` rowids.
pub type DbId = i64;

/// Character identifiers come from the remote catalog and double as the
/// primary key of the local collection table.
pub type CharacterId = i64;
