//! Team feed - wins and blockers, newest first

use serde::Serialize;

use crate::domain::entities::{Post, PostKind, Snapshot};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedItem {
    pub id: u64,
    pub author_id: u64,
    pub author: String,
    pub text: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TeamFeed {
    pub wins: Vec<FeedItem>,
    pub blockers: Vec<FeedItem>,
}

impl TeamFeed {
    pub fn is_empty(&self) -> bool {
        self.wins.is_empty() && self.blockers.is_empty()
    }
}

pub fn build_feed(snapshot: &Snapshot) -> TeamFeed {
    let mut posts: Vec<&Post> = snapshot.posts.iter().collect();
    posts.sort_by(|a, b| b.posted_at().cmp(&a.posted_at()));

    let mut feed = TeamFeed::default();
    for post in posts {
        let item = FeedItem {
            id: post.id,
            author_id: post.author_id,
            author: snapshot.founder_name(post.author_id).to_string(),
            text: post.text.clone(),
            timestamp: post.timestamp.clone(),
        };
        match post.kind {
            PostKind::Win => feed.wins.push(item),
            PostKind::Blocker => feed.blockers.push(item),
        }
    }
    feed
}
