//! Home Page Content Model
//!
//! Goods category navigation and advertising slots rendered into the static
//! home page.

use std::collections::BTreeMap;

/// A goods category (three levels deep)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoodsCategory {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
}

/// A navigation channel pointing at a first-level category
#[derive(Debug, Clone)]
pub struct GoodsChannel {
    pub group_id: i32,
    pub category_id: i64,
    pub category_name: String,
    pub url: String,
    pub sequence: i32,
}

/// A channel entry as shown in the navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelLink {
    pub id: i64,
    pub name: String,
    pub url: String,
}

/// A second-level category with its third-level children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCategory {
    pub id: i64,
    pub name: String,
    pub sub_cats: Vec<GoodsCategory>,
}

/// One navigation group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub group_id: i32,
    pub channels: Vec<ChannelLink>,
    pub sub_cats: Vec<SubCategory>,
}

/// An advertising slot
#[derive(Debug, Clone)]
pub struct ContentCategory {
    pub id: i64,
    pub name: String,
    pub key: String,
}

/// A single advertisement
#[derive(Debug, Clone)]
pub struct Content {
    pub id: i64,
    pub category_id: i64,
    pub title: String,
    pub url: String,
    pub image: String,
    pub text: String,
    pub sequence: i32,
    pub status: bool,
}

/// Everything the home page template needs
#[derive(Debug, Clone)]
pub struct IndexPage {
    pub categories: Vec<CategoryGroup>,
    pub contents: BTreeMap<String, Vec<Content>>,
}

/// Group channels into navigation groups.
///
/// Channels must already be ordered by `(group_id, sequence)`; group order
/// follows the first appearance of each group.
#[must_use]
pub fn build_category_groups(channels: &[GoodsChannel], categories: &[GoodsCategory]) -> Vec<CategoryGroup> {
    let children_of = |parent: i64| -> Vec<&GoodsCategory> {
        categories
            .iter()
            .filter(|c| c.parent_id == Some(parent))
            .collect()
    };

    let mut groups: Vec<CategoryGroup> = Vec::new();
    for channel in channels {
        let position = match groups.iter().position(|g| g.group_id == channel.group_id) {
            Some(position) => position,
            None => {
                groups.push(CategoryGroup {
                    group_id: channel.group_id,
                    channels: Vec::new(),
                    sub_cats: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[position];

        group.channels.push(ChannelLink {
            id: channel.category_id,
            name: channel.category_name.clone(),
            url: channel.url.clone(),
        });

        for cat2 in children_of(channel.category_id) {
            group.sub_cats.push(SubCategory {
                id: cat2.id,
                name: cat2.name.clone(),
                sub_cats: children_of(cat2.id).into_iter().cloned().collect(),
            });
        }
    }
    groups
}

/// Bucket active contents under their slot key, keeping `sequence` order.
///
/// Every slot gets an entry, empty slots included.
#[must_use]
pub fn group_contents(slots: &[ContentCategory], contents: Vec<Content>) -> BTreeMap<String, Vec<Content>> {
    let mut grouped: BTreeMap<String, Vec<Content>> =
        slots.iter().map(|s| (s.key.clone(), Vec::new())).collect();

    for content in contents.into_iter().filter(|c| c.status) {
        if let Some(slot) = slots.iter().find(|s| s.id == content.category_id) {
            if let Some(bucket) = grouped.get_mut(&slot.key) {
                bucket.push(content);
            }
        }
    }
    for bucket in grouped.values_mut() {
        bucket.sort_by_key(|c| c.sequence);
    }
    grouped
}
