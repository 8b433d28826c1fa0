use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_ingredients::Entity")]
    ProductIngredients,
    #[sea_orm(has_many = "super::favorites::Entity")]
    Favorites,
}

impl Related<super::product_ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductIngredients.def()
    }
}

impl Related<super::favorites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorites.def()
    }
}

// Many-to-many to ingredients through the association table.
impl Related<super::ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_ingredients::Relation::Ingredients.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::product_ingredients::Relation::Products
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
