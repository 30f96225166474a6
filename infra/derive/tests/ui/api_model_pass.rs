use mfg_derive::api_model;

#[api_model(deny_unknown_fields = false)]
#[derive(Default)]
pub struct SoleFormValues {
    pub material_id: Option<String>,
    pub size_min: Option<u8>,
}

#[api_model]
pub struct StrictReference {
    pub id: String,
    pub display_name: String,
}

fn main() {
    let lenient: SoleFormValues =
        serde_json::from_str(r#"{"materialId":"m-1","sizeMin":38,"uiOnly":true}"#).unwrap();
    assert_eq!(lenient.material_id.as_deref(), Some("m-1"));
    assert_eq!(lenient.clone(), lenient);

    let strict = serde_json::from_str::<StrictReference>(r#"{"id":"a","displayName":"b","x":1}"#);
    assert!(strict.is_err());
}
