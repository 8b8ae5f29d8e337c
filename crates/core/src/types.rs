/// Mower identifiers are opaque strings assigned by the catalog service.
pub type MowerId = String;
