//! Diesel table definitions. Must match `backend/migrations` exactly.

diesel::table! {
    /// Restaurant tenants keyed by their public routing key.
    tenants (tenant_key) {
        /// Immutable `<slug>_<NNNNNN>` key; primary key.
        tenant_key -> Varchar,
        display_name -> Varchar,
        /// Owning account; unique.
        owner_ref -> Varchar,
        /// `free` or `pro`.
        plan -> Varchar,
        created_at -> Timestamptz,
    }
}
