//! Card components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are stateless: each render maps props straight to markup and
//! leaves layout to the stylesheet and navigation to the router link.

pub mod card;
pub mod card_group;
pub mod card_list;
