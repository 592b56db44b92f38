use std::{
    io,
    path::PathBuf,
};

use enkodo::{
    Enkodo,
    Marshal,
    Unmarshal,
};

/// Carried on the wire as a plain string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Handle(pub String);

impl From<Handle> for String {
    fn from(value: Handle) -> Self {
        value.0
    }
}

impl From<String> for Handle {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Carried on the wire as a single byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Level {
    #[default]
    Low,
    High,
}

impl From<Level> for u8 {
    fn from(value: Level) -> Self {
        match value {
            Level::Low => 0,
            Level::High => 1,
        }
    }
}

impl From<u8> for Level {
    fn from(value: u8) -> Self {
        match value {
            0 => Level::Low,
            _ => Level::High,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Enkodo)]
pub struct User {
    #[enkodo]
    pub email: String,
    #[enkodo]
    pub age: u8,
    #[enkodo(wire = "String")]
    pub twitter: Handle,
    /// Not annotated, never on the wire.
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Enkodo)]
pub struct Post {
    #[enkodo]
    pub name: String,
    #[enkodo]
    pub user: Box<User>,
    #[enkodo]
    pub data: Vec<u8>,
    #[enkodo]
    pub numbers: Vec<i64>,
    #[enkodo]
    pub users: Vec<Box<User>>,
}

#[derive(Debug, Clone, Default, PartialEq, Enkodo)]
pub struct Matrix {
    #[enkodo]
    pub rows: Vec<Vec<i32>>,
    #[enkodo]
    pub left: Vec<String>,
    #[enkodo]
    pub right: Vec<String>,
    #[enkodo]
    pub blocks: Vec<Vec<u8>>,
    #[enkodo]
    pub flags: Vec<bool>,
    #[enkodo]
    pub ratio: f64,
    #[enkodo]
    pub scale: f32,
    #[enkodo]
    pub tiny: i8,
    #[enkodo]
    pub short: i16,
    #[enkodo]
    pub medium: i32,
    #[enkodo]
    pub count: usize,
    #[enkodo]
    pub offset: isize,
    #[enkodo]
    pub port: u16,
    #[enkodo]
    pub id: std::primitive::u64,
}

#[derive(Debug, Enkodo)]
pub struct Report {
    #[enkodo]
    pub error: io::Error,
    #[enkodo]
    pub history: Vec<io::Error>,
    #[enkodo]
    pub path: PathBuf,
    #[enkodo = "u8"]
    pub level: Level,
}

#[derive(Debug, Clone, Default, PartialEq, Enkodo)]
pub struct Toggle {
    #[enkodo]
    pub on: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Owner {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Enkodo)]
pub struct Partial {
    #[enkodo]
    pub kept: u32,
    #[enkodo]
    pub pair: (i32, i32),
    #[enkodo]
    pub points: Vec<(i32, i32)>,
    #[enkodo]
    pub owner: Owner,
    #[enkodo]
    hidden: u32,
    #[enkodo = ""]
    pub tail: u16,
    pub unannotated: u32,
}

impl Partial {
    pub fn with_hidden(hidden: u32) -> Self {
        Self {
            hidden,
            ..Default::default()
        }
    }

    pub fn hidden(&self) -> u32 {
        self.hidden
    }
}

#[derive(Debug, Clone, Default, PartialEq, Enkodo)]
pub struct Wrapper<T: Default + Marshal + Unmarshal> {
    #[enkodo]
    pub inner: Box<T>,
    #[enkodo]
    pub items: Vec<Box<T>>,
    #[enkodo]
    pub count: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Enkodo)]
pub struct Empty {
    pub a: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Enkodo)]
pub struct AllSkipped {
    #[enkodo]
    secret: u8,
}
