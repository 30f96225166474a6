use mfg_catalog::SequentialIdGenerator;
use mfg_catalog::form::{ModelFormValues, model_from_form_values, model_to_form_values};
use mfg_domain::config::CatalogConfig;
use mfg_domain::{
    CuttingPartUsage, Gender, HardwareItemOption, HardwareSet, InsoleOption, LacingType,
    MaterialGroup, MaterialReference, ModelCategory, ModelDraft, ModelType, PerforationOption,
    ReferenceItem, Season, SoleOption, SuperBom, UnitOfMeasure,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn id(prefix: &'static str) -> impl Strategy<Value = String> {
    "[a-z0-9]{1,8}".prop_map(move |suffix| format!("{prefix}-{suffix}"))
}

fn money() -> impl Strategy<Value = f64> {
    (0u32..1_000_000).prop_map(|cents| f64::from(cents) / 100.0)
}

fn text() -> impl Strategy<Value = String> {
    "[A-Za-zА-Яа-я0-9 ]{0,16}"
}

fn maybe_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(text())
}

fn one_of<T: IntoEnumIterator + Clone + std::fmt::Debug + 'static>() -> impl Strategy<Value = T> {
    prop::sample::select(T::iter().collect::<Vec<_>>())
}

fn placeholder(id: String) -> MaterialReference {
    MaterialReference::placeholder(id, MaterialGroup::Other, UnitOfMeasure::Piece)
}

fn perforation() -> impl Strategy<Value = PerforationOption> {
    let texts = (text(), maybe_text(), maybe_text(), maybe_text());
    (id("perf"), texts, any::<bool>(), any::<bool>()).prop_map(
        |(id, (name, code, description, preview_image), is_default, is_active)| {
            PerforationOption { id, name, code, description, preview_image, is_default, is_active }
        },
    )
}

fn insole() -> impl Strategy<Value = InsoleOption> {
    let season = proptest::option::of(one_of::<Season>());
    let details = (maybe_text(), season, proptest::option::of(0u8..12));
    (id("insole"), text(), details, any::<bool>(), any::<bool>()).prop_map(
        |(id, name, (material, seasonality, thickness), is_default, is_active)| InsoleOption {
            id,
            name,
            material,
            seasonality,
            thickness_mm: thickness.map(f64::from),
            is_default,
            is_active,
        },
    )
}

fn hardware_item() -> impl Strategy<Value = HardwareItemOption> {
    let materials = prop::collection::vec(id("mat"), 0..3);
    let group = one_of::<MaterialGroup>();
    (id("hardware-item"), text(), group, materials, any::<bool>(), maybe_text()).prop_map(
        |(id, name, material_group, materials, requires_exact_selection, notes)| {
            HardwareItemOption {
                id,
                name,
                material_group,
                compatible_materials: materials.into_iter().map(placeholder).collect(),
                requires_exact_selection,
                notes,
            }
        },
    )
}

fn hardware_set() -> impl Strategy<Value = HardwareSet> {
    let items = prop::collection::vec(hardware_item(), 0..3);
    (id("hardware"), text(), maybe_text(), items, any::<bool>(), any::<bool>()).prop_map(
        |(id, name, description, items, is_default, is_active)| HardwareSet {
            id,
            name,
            description,
            items,
            is_default,
            is_active,
        },
    )
}

fn cutting_part() -> impl Strategy<Value = CuttingPartUsage> {
    let costs = (proptest::option::of(money()), proptest::option::of(money()));
    (id("cutting"), id("part"), id("mat"), 1u8..=10, costs, maybe_text()).prop_map(
        |(id, part, material, quantity, (consumption_per_pair, labor_cost), notes)| {
            CuttingPartUsage {
                id,
                part: ReferenceItem::cutting_part(part),
                material: placeholder(material),
                quantity,
                consumption_per_pair,
                labor_cost,
                notes,
            }
        },
    )
}

fn sole() -> impl Strategy<Value = SoleOption> {
    let sizes = (20u8..=55, 0u8..10);
    (id("sole"), text(), id("mat"), sizes, any::<bool>(), maybe_text(), maybe_text()).prop_map(
        |(id, name, material, (size_min, span), is_default, color, notes)| SoleOption {
            id,
            name,
            material: MaterialReference::placeholder(
                material,
                MaterialGroup::Sole,
                UnitOfMeasure::Pair,
            ),
            size_min,
            size_max: size_min.saturating_add(span),
            is_default,
            color,
            notes,
        },
    )
}

prop_compose! {
    fn classification()(
        gender in one_of::<Gender>(),
        model_type in one_of::<ModelType>(),
        category in one_of::<ModelCategory>(),
        season in proptest::option::of(one_of::<Season>()),
        lacing_type in proptest::option::of(one_of::<LacingType>()),
        collection in maybe_text(),
        last_code in maybe_text(),
        last_type in maybe_text(),
    ) -> ModelDraft {
        ModelDraft {
            gender,
            model_type,
            category,
            season,
            lacing_type,
            collection,
            last_code,
            last_type,
            ..ModelDraft::default()
        }
    }
}

prop_compose! {
    fn draft()(
        base in classification(),
        name in text(),
        article in "[A-Z]{2}-[0-9]{3}",
        size_min in 20u8..=40,
        span in 0u8..=15,
        is_active in any::<bool>(),
        retail_price in money(),
        costs in (
            proptest::option::of(money()),
            proptest::option::of(money()),
            proptest::option::of(money()),
        ),
        perforation_options in prop::collection::vec(perforation(), 0..3),
        insole_options in prop::collection::vec(insole(), 0..3),
        hardware_sets in prop::collection::vec(hardware_set(), 0..3),
        cutting_parts in prop::collection::vec(cutting_part(), 0..4),
        sole_options in prop::collection::vec(sole(), 0..3),
        default_sole_option_id in proptest::option::of(id("sole")),
        description in maybe_text(),
        notes in maybe_text(),
    ) -> ModelDraft {
        let (material_cost, labor_cost, overhead_cost) = costs;
        ModelDraft {
            name,
            article,
            size_min,
            size_max: size_min + span,
            default_sole_option_id,
            is_active,
            retail_price,
            wholesale_price: retail_price / 2.0,
            material_cost,
            labor_cost,
            overhead_cost,
            description,
            super_bom: SuperBom { perforation_options, insole_options, hardware_sets },
            cutting_parts,
            sole_options,
            notes,
            ..base
        }
    }
}

proptest! {
    #[test]
    fn form_round_trip_preserves_the_draft(draft in draft()) {
        let config = CatalogConfig::default();
        let ids = SequentialIdGenerator::default();

        let values = model_to_form_values(Some(&draft), &config, &ids);
        let restored = model_from_form_values(values, &config, &ids);

        prop_assert_eq!(restored, draft);
    }

    #[test]
    fn form_values_survive_json(draft in draft()) {
        let config = CatalogConfig::default();
        let ids = SequentialIdGenerator::default();
        let values = model_to_form_values(Some(&draft), &config, &ids);

        let json = serde_json::to_string(&values).unwrap();
        let parsed: ModelFormValues = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(values, parsed);
    }
}
