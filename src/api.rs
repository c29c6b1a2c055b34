//! Public API surface for the availability and navigation core.
//!
//! This file consolidates the typed identifiers and re-exports the DTO
//! types consumed by host applications. All types derive
//! Serialize/Deserialize for JSON interchange with the remote data service.

pub use crate::models::age_range::AgeRange;
pub use crate::models::entities::Coach;
pub use crate::models::entities::CoachReview;
pub use crate::models::entities::DayOfWeek;
pub use crate::models::entities::EntityKind;
pub use crate::models::entities::EntityRef;
pub use crate::models::entities::Location;
pub use crate::models::entities::Program;
pub use crate::models::entities::Session;
pub use crate::models::entities::SessionStatus;
pub use crate::models::view_rows::JoinedSessionRow;
pub use crate::models::view_rows::SessionViewRow;
pub use crate::services::availability::AvailabilityInput;
pub use crate::services::availability::AvailabilitySnapshot;
pub use crate::services::availability::SessionAction;
pub use crate::services::availability::SpotsBadge;
pub use crate::services::availability::UrgencyTier;
pub use crate::services::fetcher::EntityFetcher;
pub use crate::services::payment_plans::PaymentPlan;
pub use crate::view::actions::RegistrationHooks;
pub use crate::view::card::SessionCardModel;
pub use crate::view::detail::DetailView;
pub use crate::view::detail::ViewState;

use crate::define_key_type;

define_key_type!(SessionId);
define_key_type!(ProgramId);
define_key_type!(LocationId);
define_key_type!(CoachId);
define_key_type!(OrganizationId);
