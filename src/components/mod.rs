//! ECS components for entities.
//!
//! Every world object is an entity built from these plain data components.
//! The "all active world objects" view is simply a query over
//! [`mapposition::MapPosition`]; kind-specific behaviour is selected with the
//! marker components ([`player::Player`], [`platform::Platform`],
//! [`enemy::Enemy`], [`coin::Coin`]).
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned rectangular collider
//! - [`coin`] – collectible coin marker
//! - [`enemy`] – patrolling enemy marker
//! - [`inputcontrolled`] – run speed and jump strength for input-driven bodies
//! - [`mapposition`] – top-left world position
//! - [`persistent`] – marker for entities that survive a restart
//! - [`platform`] – platform dimensions in blocks
//! - [`player`] – player contact state
//! - [`rigidbody`] – velocity and named accelerations
//! - [`sprite`] – visual key handed to the renderer
//! - [`zindex`] – back-to-front ordering hint

pub mod boxcollider;
pub mod coin;
pub mod enemy;
pub mod inputcontrolled;
pub mod mapposition;
pub mod persistent;
pub mod platform;
pub mod player;
pub mod rigidbody;
pub mod sprite;
pub mod zindex;
