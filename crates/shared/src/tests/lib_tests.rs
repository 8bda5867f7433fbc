use crate::{
    domain::{User, UserFilter, UserId},
    error::ApiError,
    protocol::UserListResponse,
};

#[test]
fn selector_values_parse_to_filters() {
    assert_eq!("all".parse::<UserFilter>(), Ok(UserFilter::All));
    assert_eq!("Todos".parse::<UserFilter>(), Ok(UserFilter::All));
    assert_eq!("".parse::<UserFilter>(), Ok(UserFilter::All));
    assert_eq!("1".parse::<UserFilter>(), Ok(UserFilter::Active));
    assert_eq!(" activos ".parse::<UserFilter>(), Ok(UserFilter::Active));
    assert_eq!("0".parse::<UserFilter>(), Ok(UserFilter::Inactive));
    assert_eq!("false".parse::<UserFilter>(), Ok(UserFilter::Inactive));
    assert!("2".parse::<UserFilter>().is_err());
    assert!("NaN".parse::<UserFilter>().is_err());
}

#[test]
fn selector_value_round_trips_through_parse() {
    for filter in UserFilter::OPTIONS {
        assert_eq!(filter.selector_value().parse::<UserFilter>(), Ok(filter));
    }
}

#[test]
fn activo_parameter_matches_filter() {
    assert_eq!(UserFilter::All.activo(), None);
    assert_eq!(UserFilter::Active.activo(), Some(1));
    assert_eq!(UserFilter::Inactive.activo(), Some(0));
    assert_eq!(UserFilter::from_activo(Some(1)), Ok(UserFilter::Active));
    assert!(UserFilter::from_activo(Some(7)).is_err());
}

#[test]
fn listing_envelope_decodes_camel_case_total_pages() {
    let raw = serde_json::json!({
        "message": "ok",
        "data": {
            "totalPages": 3,
            "total": 25,
            "usuarios": [
                {"id": 7, "nombre": "Ana", "apellido": "Pérez", "email": "ana@example.com", "rol": "admin"}
            ]
        }
    });

    let response: UserListResponse = serde_json::from_value(raw).expect("decode");
    assert_eq!(response.data.total_pages, 3);
    assert_eq!(response.data.total, 25);
    assert_eq!(
        response.data.usuarios,
        vec![User {
            id: UserId(7),
            nombre: "Ana".into(),
            apellido: "Pérez".into(),
            email: "ana@example.com".into(),
            rol: "admin".into(),
        }]
    );
}

#[test]
fn api_error_without_code_defaults_to_internal() {
    let err: ApiError =
        serde_json::from_str(r#"{"message":"boom"}"#).expect("decode");
    assert_eq!(err.message, "boom");
    assert_eq!(err.code, crate::error::ErrorCode::Internal);
}
