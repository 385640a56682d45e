//! Area DTOs

use serde::Serialize;

use crate::domain::models::area::{AreaRef, AreaWithSubs};

#[derive(Debug, Clone, Serialize)]
pub struct AreaResponseDto {
    pub id: i64,
    pub name: String,
}

impl From<AreaRef> for AreaResponseDto {
    fn from(area: AreaRef) -> Self {
        Self {
            id: area.id,
            name: area.name,
        }
    }
}

/// An area with its direct children
#[derive(Debug, Clone, Serialize)]
pub struct AreaDetailResponseDto {
    pub id: i64,
    pub name: String,
    pub subs: Vec<AreaResponseDto>,
}

impl From<AreaWithSubs> for AreaDetailResponseDto {
    fn from(area: AreaWithSubs) -> Self {
        Self {
            id: area.area.id,
            name: area.area.name,
            subs: area.subs.into_iter().map(AreaResponseDto::from).collect(),
        }
    }
}
