// Infrastructure clients
pub mod supabase_client;

pub use supabase_client::{DatastoreError, SupabaseClient};
