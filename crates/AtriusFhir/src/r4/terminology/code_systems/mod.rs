// @generated by AtriusCodeSystemGen
// DO NOT EDIT MANUALLY

//! FHIR R4 (4.0.1) code systems.

pub mod account_status;
pub mod address_use;
pub mod administrative_gender;
pub mod binding_strength;
pub mod bundle_type;
pub mod contact_point_system;
pub mod days_of_week;
pub mod device_statement_status;
pub mod encounter_status;
pub mod event_status;
pub mod fm_status;
pub mod http_verb;
pub mod identifier_use;
pub mod imagingstudy_status;
pub mod link_type;
pub mod map_context_type;
pub mod map_group_type_mode;
pub mod map_input_mode;
pub mod map_model_mode;
pub mod map_source_list_mode;
pub mod map_target_list_mode;
pub mod map_transform;
pub mod name_use;
pub mod narrative_status;
pub mod observation_status;
pub mod product_category;
pub mod product_status;
pub mod product_storage_scale;
pub mod publication_status;
pub mod quantity_comparator;
pub mod questionnaire_answers_status;
pub mod request_intent;
pub mod request_priority;
pub mod request_status;
pub mod search_entry_mode;
pub mod spdx_license;
pub mod standards_status;
pub mod supplydelivery_status;

pub use account_status::*;
pub use address_use::*;
pub use administrative_gender::*;
pub use binding_strength::*;
pub use bundle_type::*;
pub use contact_point_system::*;
pub use days_of_week::*;
pub use device_statement_status::*;
pub use encounter_status::*;
pub use event_status::*;
pub use fm_status::*;
pub use http_verb::*;
pub use identifier_use::*;
pub use imagingstudy_status::*;
pub use link_type::*;
pub use map_context_type::*;
pub use map_group_type_mode::*;
pub use map_input_mode::*;
pub use map_model_mode::*;
pub use map_source_list_mode::*;
pub use map_target_list_mode::*;
pub use map_transform::*;
pub use name_use::*;
pub use narrative_status::*;
pub use observation_status::*;
pub use product_category::*;
pub use product_status::*;
pub use product_storage_scale::*;
pub use publication_status::*;
pub use quantity_comparator::*;
pub use questionnaire_answers_status::*;
pub use request_intent::*;
pub use request_priority::*;
pub use request_status::*;
pub use search_entry_mode::*;
pub use spdx_license::*;
pub use standards_status::*;
pub use supplydelivery_status::*;

use crate::terminology::CodeSystemOps;
use crate::terminology::registry::find_by_url;

/// Every generated code system, ordered by module name.
pub static ALL: &[CodeSystemOps] = &[
    CodeSystemOps::of::<account_status::AccountStatus>(),
    CodeSystemOps::of::<address_use::AddressUse>(),
    CodeSystemOps::of::<administrative_gender::AdministrativeGender>(),
    CodeSystemOps::of::<binding_strength::BindingStrength>(),
    CodeSystemOps::of::<bundle_type::BundleType>(),
    CodeSystemOps::of::<contact_point_system::ContactPointSystem>(),
    CodeSystemOps::of::<days_of_week::DaysOfWeek>(),
    CodeSystemOps::of::<device_statement_status::DeviceUseStatementStatus>(),
    CodeSystemOps::of::<encounter_status::EncounterStatus>(),
    CodeSystemOps::of::<event_status::EventStatus>(),
    CodeSystemOps::of::<fm_status::FinancialResourceStatusCodes>(),
    CodeSystemOps::of::<http_verb::HTTPVerb>(),
    CodeSystemOps::of::<identifier_use::IdentifierUse>(),
    CodeSystemOps::of::<imagingstudy_status::ImagingStudyStatus>(),
    CodeSystemOps::of::<link_type::LinkType>(),
    CodeSystemOps::of::<map_context_type::StructureMapContextType>(),
    CodeSystemOps::of::<map_group_type_mode::StructureMapGroupTypeMode>(),
    CodeSystemOps::of::<map_input_mode::StructureMapInputMode>(),
    CodeSystemOps::of::<map_model_mode::StructureMapModelMode>(),
    CodeSystemOps::of::<map_source_list_mode::StructureMapSourceListMode>(),
    CodeSystemOps::of::<map_target_list_mode::StructureMapTargetListMode>(),
    CodeSystemOps::of::<map_transform::StructureMapTransform>(),
    CodeSystemOps::of::<name_use::NameUse>(),
    CodeSystemOps::of::<narrative_status::NarrativeStatus>(),
    CodeSystemOps::of::<observation_status::ObservationStatus>(),
    CodeSystemOps::of::<product_category::BiologicallyDerivedProductCategory>(),
    CodeSystemOps::of::<product_status::BiologicallyDerivedProductStatus>(),
    CodeSystemOps::of::<product_storage_scale::BiologicallyDerivedProductStorageScale>(),
    CodeSystemOps::of::<publication_status::PublicationStatus>(),
    CodeSystemOps::of::<quantity_comparator::QuantityComparator>(),
    CodeSystemOps::of::<questionnaire_answers_status::QuestionnaireResponseStatus>(),
    CodeSystemOps::of::<request_intent::RequestIntent>(),
    CodeSystemOps::of::<request_priority::RequestPriority>(),
    CodeSystemOps::of::<request_status::RequestStatus>(),
    CodeSystemOps::of::<search_entry_mode::SearchEntryMode>(),
    CodeSystemOps::of::<spdx_license::SPDXLicense>(),
    CodeSystemOps::of::<standards_status::StandardsStatus>(),
    CodeSystemOps::of::<supplydelivery_status::SupplyDeliveryStatus>(),
];

/// Looks up a code system by canonical URL; a `|version` suffix is ignored.
pub fn code_system_by_url(url: &str) -> Option<&'static CodeSystemOps> {
    find_by_url(ALL, url)
}
