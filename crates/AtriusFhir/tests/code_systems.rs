use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use atrius_fhir_lib::r4::terminology::code_systems::*;
use atrius_fhir_lib::r4::terminology::{ALL, code_system_by_url};
use atrius_fhir_lib::terminology::{CodeError, CodeSystem, Coded};
use atrius_fhir_lib::{Code, Coding, Element};

fn hash_of<T: Hash>(v: &T) -> u64 {
    let mut h = DefaultHasher::new();
    v.hash(&mut h);
    h.finish()
}

/// Checks every property a generated table must have.
fn check_code_system<S>()
where
    S: CodeSystem
        + std::str::FromStr<Err = CodeError>
        + std::fmt::Display
        + serde::Serialize
        + serde::de::DeserializeOwned,
{
    let concepts = S::concepts();
    assert!(!concepts.is_empty(), "{} has no concepts", S::URL);

    let mut seen = HashSet::new();
    for (i, c) in concepts.iter().enumerate() {
        assert!(seen.insert(c.code), "{}: duplicate code {}", S::URL, c.code);

        // string -> code -> string
        let value = S::try_from_code(c.code).unwrap();
        assert_eq!(value, c.value);
        assert_eq!(value.as_code(), c.code);
        assert_eq!(value.to_string(), c.code);
        assert_eq!(c.code.parse::<S>(), Ok(value));
        assert_eq!(value.concept().code, c.code);
        assert_eq!(value.display(), c.display);
        assert!(!c.display.is_empty());

        // wrapped form
        let coded = Coded::<S>::try_from_code(c.code).unwrap();
        assert_eq!(coded.value(), Some(value));
        assert_eq!(coded.code(), Some(c.code));
        assert_eq!(coded, Coded::of(concepts[i].value));
        assert_eq!(hash_of(&coded), hash_of(&Coded::of(value)));

        let json = serde_json::to_value(value).unwrap();
        assert_eq!(json, serde_json::Value::String(c.code.to_string()));
        assert_eq!(serde_json::from_value::<S>(json).unwrap(), value);
    }

    // Not a member: case and punctuation matter
    for bogus in ["", " ", "not-a-real-code", "UNKNOWN-CODE"] {
        assert_eq!(
            S::try_from_code(bogus),
            Err(CodeError::unknown_code(S::URL, bogus)),
            "{}: {bogus:?}",
            S::URL
        );
        assert!(Coded::<S>::try_from_code(bogus).is_err());
    }

    assert_eq!(S::from_optional_code(None), Ok(None));
    assert_eq!(Coded::<S>::from_optional_code(None), Ok(None));

    // Enumeration is stable across calls
    let first: Vec<S> = S::all().collect();
    let second: Vec<S> = S::all().collect();
    assert_eq!(first, second);
    assert_eq!(S::codes(), concepts.iter().map(|c| c.code).collect::<Vec<_>>());

    // Distinct values compare and hash differently as coded values
    if concepts.len() > 1 {
        let a = Coded::of(concepts[0].value);
        let b = Coded::of(concepts[1].value);
        assert_ne!(a, b);
    }
}

macro_rules! check_all {
    ($($ty:ty),* $(,)?) => {
        $( check_code_system::<$ty>(); )*
    };
}

#[test]
fn every_generated_code_system_round_trips() {
    check_all!(
        AccountStatus,
        AddressUse,
        AdministrativeGender,
        BindingStrength,
        BundleType,
        ContactPointSystem,
        DaysOfWeek,
        DeviceUseStatementStatus,
        EncounterStatus,
        EventStatus,
        FinancialResourceStatusCodes,
        HTTPVerb,
        IdentifierUse,
        ImagingStudyStatus,
        LinkType,
        StructureMapContextType,
        StructureMapGroupTypeMode,
        StructureMapInputMode,
        StructureMapModelMode,
        StructureMapSourceListMode,
        StructureMapTargetListMode,
        StructureMapTransform,
        NameUse,
        NarrativeStatus,
        ObservationStatus,
        BiologicallyDerivedProductCategory,
        BiologicallyDerivedProductStatus,
        BiologicallyDerivedProductStorageScale,
        PublicationStatus,
        QuantityComparator,
        QuestionnaireResponseStatus,
        RequestIntent,
        RequestPriority,
        RequestStatus,
        SearchEntryMode,
        SPDXLicense,
        StandardsStatus,
        SupplyDeliveryStatus,
    );
}

#[test]
fn registry_covers_every_table() {
    assert_eq!(ALL.len(), 38);

    let mut urls = HashSet::new();
    for ops in ALL {
        assert!(urls.insert(ops.url), "duplicate url {}", ops.url);
        assert_eq!(ops.version, Some("4.0.1"));

        let found = code_system_by_url(ops.url).unwrap();
        assert_eq!(found.name, ops.name);

        for code in (ops.codes)() {
            assert!((ops.is_valid_code)(code));
            assert!((ops.display_of)(code).is_some());
        }
        assert!(!(ops.is_valid_code)("not-a-real-code"));
    }

    assert!(code_system_by_url("http://hl7.org/fhir/request-intent|4.0.1").is_some());
    assert!(code_system_by_url("http://unitsofmeasure.org").is_none());
}

#[test]
fn symbolic_and_uppercase_codes() {
    assert_eq!(QuantityComparator::try_from_code("<="), Ok(QuantityComparator::Le));
    assert_eq!(QuantityComparator::Gt.as_code(), ">");
    assert_eq!(QuantityComparator::Ge.display(), "Greater or Equal to");

    assert_eq!(HTTPVerb::try_from_code("GET"), Ok(HTTPVerb::Get));
    assert!(HTTPVerb::try_from_code("get").is_err());

    assert_eq!(
        StructureMapTransform::try_from_code("dateOp"),
        Ok(StructureMapTransform::Dateop)
    );

    assert_eq!(SPDXLicense::try_from_code("0BSD"), Ok(SPDXLicense::N0bsd));
    assert_eq!(SPDXLicense::Apache20.as_code(), "Apache-2.0");
    assert_eq!(
        SPDXLicense::try_from_code("PDDL-1.0").map(|l| l.display()),
        Ok("ODC Public Domain Dedication & License 1.0")
    );
    assert_eq!(StructureMapContextType::Type__.as_code(), "type");
    assert_eq!(
        StructureMapSourceListMode::try_from_code("not_first"),
        Ok(StructureMapSourceListMode::NotFirst)
    );
    assert_eq!(BiologicallyDerivedProductStorageScale::Farenheit.display(), "Fahrenheit");
}

#[test]
fn hierarchical_concepts_are_flattened_parent_first() {
    let codes = RequestIntent::codes();
    let order = codes.iter().position(|c| *c == "order").unwrap();
    let filler = codes.iter().position(|c| *c == "filler-order").unwrap();
    let instance = codes.iter().position(|c| *c == "instance-order").unwrap();
    assert!(order < filler && filler < instance);
    assert_eq!(codes.last(), Some(&"option"));

    assert_eq!(ObservationStatus::try_from_code("corrected"), Ok(ObservationStatus::Corrected));
    assert_eq!(NameUse::Maiden.display(), "Name changed for Marriage");
}

#[test]
fn conversions_into_fhir_datatypes() {
    let code: Code = PublicationStatus::Active.to_code();
    assert_eq!(code.value.as_deref(), Some("active"));
    assert_eq!(PublicationStatus::try_from_code_element(&code), Ok(PublicationStatus::Active));
    assert_eq!(
        PublicationStatus::try_from_code_element(&Element::default()),
        Err(CodeError::MissingCode {
            system: "http://hl7.org/fhir/publication-status"
        })
    );

    let cc = BundleType::Searchset.to_codeable_concept();
    assert_eq!(cc.codings().len(), 1);
    assert_eq!(cc.codings()[0].display_value(), Some("Search Results"));

    let coding = Coding::new("http://hl7.org/fhir/bundle-type", "batch");
    assert_eq!(BundleType::try_from_coding(&coding), Ok(BundleType::Batch));

    let wrong = Coding::new("http://hl7.org/fhir/http-verb", "batch");
    assert!(matches!(
        BundleType::try_from_coding(&wrong),
        Err(CodeError::SystemMismatch { .. })
    ));
}

#[test]
fn unknown_code_error_message_names_code_and_system() {
    let err = EncounterStatus::try_from_code("in progress").unwrap_err();
    assert_eq!(
        err.to_string(),
        "'in progress' is not a valid code for code system http://hl7.org/fhir/encounter-status"
    );
}

#[test]
fn ordering_follows_declaration_order() {
    let mut days = vec![DaysOfWeek::Sun, DaysOfWeek::Mon, DaysOfWeek::Wed];
    days.sort();
    assert_eq!(days, [DaysOfWeek::Mon, DaysOfWeek::Wed, DaysOfWeek::Sun]);
}
