use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_ingredients::Entity")]
    ProductIngredients,
}

impl Related<super::product_ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductIngredients.def()
    }
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_ingredients::Relation::Products.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::product_ingredients::Relation::Ingredients
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
