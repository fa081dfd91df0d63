use entities::sea_orm_active_enums::MemberTypeId;
use juniper::{FieldResult, graphql_object};

use super::profile::Profile;
use crate::{state::AppData, store};

pub struct MemberType {
    pub id: MemberTypeId,
    pub discount: f64,
    pub posts_limit_per_month: i32,
}

impl From<entities::member_types::Model> for MemberType {
    fn from(m: entities::member_types::Model) -> Self {
        Self {
            id: m.id,
            discount: m.discount,
            posts_limit_per_month: m.posts_limit_per_month,
        }
    }
}

#[graphql_object(context = AppData)]
impl MemberType {
    fn id(&self) -> MemberTypeId {
        self.id
    }

    fn discount(&self) -> f64 {
        self.discount
    }

    fn posts_limit_per_month(&self) -> i32 {
        self.posts_limit_per_month
    }

    async fn profiles(&self, ctx: &AppData) -> FieldResult<Option<Vec<Profile>>> {
        let profiles = store::find_profiles_by_member_type(&ctx.db, self.id)
            .await?
            .into_iter()
            .map(Profile::from)
            .collect();
        Ok(Some(profiles))
    }
}
