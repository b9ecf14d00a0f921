//! Adapters that turn an encoded order into something a browser can post.

pub mod html;
