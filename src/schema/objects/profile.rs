use entities::sea_orm_active_enums::MemberTypeId;
use juniper::{FieldResult, graphql_object};
use uuid::Uuid;

use super::{member_type::MemberType, user::User};
use crate::{state::AppData, store};

pub struct Profile {
    pub id: Uuid,
    pub is_male: bool,
    pub year_of_birth: i32,
    pub user_id: Uuid,
    pub member_type_id: MemberTypeId,
}

impl From<entities::profiles::Model> for Profile {
    fn from(p: entities::profiles::Model) -> Self {
        Self {
            id: p.id,
            is_male: p.is_male,
            year_of_birth: p.year_of_birth,
            user_id: p.user_id,
            member_type_id: p.member_type_id,
        }
    }
}

#[graphql_object(context = AppData)]
impl Profile {
    fn id(&self) -> Uuid {
        self.id
    }

    fn is_male(&self) -> bool {
        self.is_male
    }

    fn year_of_birth(&self) -> i32 {
        self.year_of_birth
    }

    fn user_id(&self) -> Uuid {
        self.user_id
    }

    fn member_type_id(&self) -> MemberTypeId {
        self.member_type_id
    }

    /// Null when the referenced member type row is missing.
    async fn member_type(&self, ctx: &AppData) -> FieldResult<Option<MemberType>> {
        let member_type = store::find_member_type(&ctx.db, self.member_type_id).await?;
        Ok(member_type.map(MemberType::from))
    }

    async fn user(&self, ctx: &AppData) -> FieldResult<Option<User>> {
        let user = store::find_user(&ctx.db, self.user_id).await?;
        Ok(user.map(User::from))
    }
}
