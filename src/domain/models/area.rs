//! Area Domain Model
//!
//! Administrative areas (province → city → district) forming a tree.

/// Identifier and display name of an area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaRef {
    pub id: i64,
    pub name: String,
}

/// An area node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
}

impl Area {
    /// Top-level areas have no parent
    #[must_use]
    pub fn is_province(&self) -> bool {
        self.parent_id.is_none()
    }

    #[must_use]
    pub fn is_child_of(&self, parent_id: i64) -> bool {
        self.parent_id == Some(parent_id)
    }

    #[must_use]
    pub fn to_area_ref(&self) -> AreaRef {
        AreaRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// An area together with its direct children
#[derive(Debug, Clone)]
pub struct AreaWithSubs {
    pub area: AreaRef,
    pub subs: Vec<AreaRef>,
}
