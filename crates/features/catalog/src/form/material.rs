use mfg_derive::api_model;
use mfg_domain::config::CatalogConfig;
use mfg_domain::material::{MaterialSpecs, MaterialStockSettings, MaterialSupplyInfo};
use mfg_domain::{MaterialDraft, MaterialGroup, UnitOfMeasure};

/// Flat material form: specs, supply and stock sections side by side.
#[api_model]
#[derive(Default)]
pub struct MaterialFormValues {
    pub code: Option<String>,
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub group: Option<MaterialGroup>,
    pub subgroup: Option<String>,
    pub material_type: Option<String>,
    pub color: Option<String>,
    pub is_active: Option<bool>,
    pub is_critical: Option<bool>,
    pub description: Option<String>,
    pub texture: Option<String>,
    pub thickness_mm: Option<f64>,
    pub density: Option<f64>,
    pub unit_primary: Option<UnitOfMeasure>,
    pub unit_secondary: Option<UnitOfMeasure>,
    pub conversion_factor: Option<f64>,
    /// Exposes `specs.notes`.
    pub characteristics_notes: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub supplier_name: Option<String>,
    pub supplier_code: Option<String>,
    pub lead_time_days: Option<u32>,
    pub min_order_qty: Option<f64>,
    pub order_multiplicity: Option<f64>,
    pub storage_conditions: Option<String>,
    pub warranty_months: Option<u32>,
    pub safety_stock: Option<f64>,
    pub reorder_point: Option<f64>,
    pub max_stock: Option<f64>,
    pub warehouse_code: Option<String>,
    pub lot_tracked: Option<bool>,
}

/// Missing currencies fall back to `defaults.currency`.
pub fn material_to_form_values(
    material: Option<&MaterialDraft>,
    config: &CatalogConfig,
) -> MaterialFormValues {
    let currency = &config.defaults.currency;
    let Some(material) = material else {
        return MaterialFormValues {
            is_active: Some(true),
            currency: Some(currency.clone()),
            unit_primary: Some(UnitOfMeasure::default()),
            lot_tracked: Some(false),
            ..MaterialFormValues::default()
        };
    };

    let MaterialDraft { specs, supply, stock, .. } = material;
    MaterialFormValues {
        code: Some(material.code.clone()),
        name: Some(material.name.clone()),
        name_en: material.name_en.clone(),
        group: Some(material.group),
        subgroup: material.subgroup.clone(),
        material_type: material.material_type.clone(),
        color: material.color.clone(),
        is_active: Some(material.is_active),
        is_critical: material.is_critical,
        description: material.description.clone(),
        texture: specs.texture.clone(),
        thickness_mm: specs.thickness_mm,
        density: specs.density,
        unit_primary: Some(specs.unit_primary),
        unit_secondary: specs.unit_secondary,
        conversion_factor: specs.conversion_factor,
        characteristics_notes: specs.notes.clone(),
        price: supply.price,
        currency: Some(supply.currency.clone().unwrap_or_else(|| currency.clone())),
        supplier_name: supply.supplier_name.clone(),
        supplier_code: supply.supplier_code.clone(),
        lead_time_days: supply.lead_time_days,
        min_order_qty: supply.min_order_qty,
        order_multiplicity: supply.order_multiplicity,
        storage_conditions: supply.storage_conditions.clone(),
        warranty_months: supply.warranty_months,
        safety_stock: stock.safety_stock,
        reorder_point: stock.reorder_point,
        max_stock: stock.max_stock,
        warehouse_code: stock.warehouse_code.clone(),
        lot_tracked: stock.lot_tracked,
    }
}

pub fn material_from_form_values(
    values: MaterialFormValues,
    config: &CatalogConfig,
) -> MaterialDraft {
    MaterialDraft {
        code: values.code.unwrap_or_default(),
        name: values.name.unwrap_or_default(),
        name_en: values.name_en,
        group: values.group.unwrap_or_default(),
        subgroup: values.subgroup,
        material_type: values.material_type,
        color: values.color,
        is_active: values.is_active.unwrap_or(true),
        is_critical: values.is_critical,
        description: values.description,
        specs: MaterialSpecs {
            texture: values.texture,
            thickness_mm: values.thickness_mm,
            density: values.density,
            unit_primary: values.unit_primary.unwrap_or_default(),
            unit_secondary: values.unit_secondary,
            conversion_factor: values.conversion_factor,
            notes: values.characteristics_notes,
        },
        supply: MaterialSupplyInfo {
            price: values.price,
            currency: Some(values.currency.unwrap_or_else(|| config.defaults.currency.clone())),
            supplier_name: values.supplier_name,
            supplier_code: values.supplier_code,
            lead_time_days: values.lead_time_days,
            min_order_qty: values.min_order_qty,
            order_multiplicity: values.order_multiplicity,
            storage_conditions: values.storage_conditions,
            warranty_months: values.warranty_months,
        },
        stock: MaterialStockSettings {
            safety_stock: values.safety_stock,
            reorder_point: values.reorder_point,
            max_stock: values.max_stock,
            warehouse_code: values.warehouse_code,
            lot_tracked: values.lot_tracked,
        },
        attachments: Vec::new(),
    }
}
