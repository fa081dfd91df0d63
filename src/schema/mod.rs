use juniper::RootNode;
use crate::state::AppData;

pub mod query;
pub mod objects;

pub type Schema<'a> = RootNode<
    'a,
    query::Query,
    juniper::EmptyMutation<AppData>,
    juniper::EmptySubscription<AppData>,
>;

/// Builds the type registry. Called once at startup; the result is shared
/// read-only by every request.
pub fn schema() -> Schema<'static> {
    Schema::new(
        query::Query,
        juniper::EmptyMutation::new(),
        juniper::EmptySubscription::new(),
    )
}
