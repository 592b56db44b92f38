//! Records whose impls are generated ahead of time by the file-level generator.

use enkodo::{
    Enkodo,
    Schema,
};

pub type UserId = u64;

#[derive(Debug, Clone, Default, PartialEq, Schema)]
pub struct Member {
    #[enkodo]
    pub id: UserId,
    #[enkodo]
    pub joined: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Schema)]
pub struct Account {
    #[enkodo]
    pub id: UserId,
    #[enkodo]
    pub name: String,
    #[enkodo]
    pub owner: Box<Member>,
    #[enkodo]
    pub followers: Vec<UserId>,
    #[enkodo]
    pub roles: Vec<String>,
    #[enkodo]
    pub avatar: Vec<u8>,
}

#[derive(Debug, Default, Schema)]
pub struct Audit {
    #[enkodo]
    pub failures: Vec<std::io::Error>,
    #[enkodo]
    pub log: std::path::PathBuf,
}

/// Already handled by the derive, so the file-level generator must leave it alone.
#[derive(Debug, Clone, Default, PartialEq, Enkodo)]
pub struct Inline {
    #[enkodo]
    pub value: u8,
}

include!(concat!(env!("OUT_DIR"), "/offline_enkodo.rs"));
