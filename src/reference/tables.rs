//! Built-in reference tables
//!
//! The order-to-cash process of the fictitious "Drystone" group: fourteen
//! activities, ten process variants, fourteen subsidiaries and their lead-time
//! skew, plus the categorical attributes attached to every case.

use crate::types::Region;

/// Activity that anchors the on-time-delivery measurement
pub const RECEIVE_PURCHASE_ORDER: &str = "Receive Purchase Order";

/// Activity whose completion counts as delivery
pub const CREATE_DELIVERY: &str = "Create Delivery";

/// All activities of the process
pub const ACTIVITIES: [&str; 14] = [
    RECEIVE_PURCHASE_ORDER,
    "Create Sales Order",
    "Change Net Price in Sales Order",
    "Change Material in Sales Order",
    "Change Manual Price in Sales Order",
    CREATE_DELIVERY,
    "Create Shipment",
    "Issue Goods",
    "Create Invoice",
    "Clear Invoice",
    "Reject Sales Order",
    "Cancel Sales Order Rejection",
    "Deactivate Delivery Block",
    "Deactivate Billing Block",
];

/// Process variants as (name, weight, activity sequence)
pub const VARIANTS: [(&str, f64, &[&str]); 10] = [
    (
        "standard_path",
        0.40,
        &[
            RECEIVE_PURCHASE_ORDER,
            "Create Sales Order",
            CREATE_DELIVERY,
            "Create Shipment",
            "Issue Goods",
            "Create Invoice",
            "Clear Invoice",
        ],
    ),
    (
        "price_change_path",
        0.15,
        &[
            RECEIVE_PURCHASE_ORDER,
            "Create Sales Order",
            "Change Net Price in Sales Order",
            CREATE_DELIVERY,
            "Create Shipment",
            "Issue Goods",
            "Create Invoice",
            "Clear Invoice",
        ],
    ),
    (
        "material_change_path",
        0.05,
        &[
            RECEIVE_PURCHASE_ORDER,
            "Create Sales Order",
            "Change Material in Sales Order",
            CREATE_DELIVERY,
            "Create Shipment",
            "Issue Goods",
            "Create Invoice",
            "Clear Invoice",
        ],
    ),
    (
        "manual_price_change_path",
        0.05,
        &[
            RECEIVE_PURCHASE_ORDER,
            "Create Sales Order",
            "Change Manual Price in Sales Order",
            CREATE_DELIVERY,
            "Create Shipment",
            "Issue Goods",
            "Create Invoice",
            "Clear Invoice",
        ],
    ),
    (
        "invoice_before_shipment",
        0.07,
        &[
            RECEIVE_PURCHASE_ORDER,
            "Create Sales Order",
            "Create Invoice",
            CREATE_DELIVERY,
            "Create Shipment",
            "Issue Goods",
            "Clear Invoice",
        ],
    ),
    (
        "invoice_after_invoice",
        0.08,
        &[
            RECEIVE_PURCHASE_ORDER,
            "Create Sales Order",
            CREATE_DELIVERY,
            "Create Shipment",
            "Issue Goods",
            "Create Invoice",
            "Create Invoice",
            "Clear Invoice",
        ],
    ),
    (
        "rejected_order",
        0.05,
        &[RECEIVE_PURCHASE_ORDER, "Create Sales Order", "Reject Sales Order"],
    ),
    (
        "rejected_then_continued",
        0.05,
        &[
            RECEIVE_PURCHASE_ORDER,
            "Create Sales Order",
            "Reject Sales Order",
            "Cancel Sales Order Rejection",
            CREATE_DELIVERY,
            "Create Shipment",
            "Issue Goods",
            "Create Invoice",
            "Clear Invoice",
        ],
    ),
    (
        "delivery_block",
        0.05,
        &[
            RECEIVE_PURCHASE_ORDER,
            "Create Sales Order",
            "Deactivate Delivery Block",
            CREATE_DELIVERY,
            "Create Shipment",
            "Issue Goods",
            "Create Invoice",
            "Clear Invoice",
        ],
    ),
    (
        "billing_block",
        0.05,
        &[
            RECEIVE_PURCHASE_ORDER,
            "Create Sales Order",
            CREATE_DELIVERY,
            "Create Shipment",
            "Issue Goods",
            "Deactivate Billing Block",
            "Create Invoice",
            "Clear Invoice",
        ],
    ),
];

/// Subsidiaries as (name, region, lead-time factor)
pub const COMPANIES: [(&str, Region, f64); 14] = [
    ("Drystone Belgium NV", Region::Europe, 1.5),
    ("Drystone Australia Ltd", Region::AsiaPacific, 1.4),
    ("Drystone Mexico Inc", Region::Americas, 1.3),
    ("Drystone Austria AG", Region::Europe, 1.2),
    ("Drystone Malaysia Co", Region::AsiaPacific, 1.1),
    ("Drystone France SA", Region::Europe, 1.1),
    ("Drystone China LLC", Region::AsiaPacific, 1.1),
    ("Drystone Deutschland GmbH", Region::Europe, 1.0),
    ("Drystone India Ltd", Region::AsiaPacific, 0.9),
    ("Drystone Italia S.P.A", Region::Europe, 0.9),
    ("Drystone Spain Co", Region::Europe, 0.8),
    ("Drystone US Inc", Region::Americas, 0.7),
    ("Drystone Ireland Ltd", Region::Europe, 0.6),
    ("Drystone UK Ltd", Region::Europe, 0.5),
];

/// Material groups a sales order can belong to
pub const MATERIAL_GROUPS: [&str; 7] = [
    "Power Tools",
    "Safety equipment",
    "Building Materials",
    "Fasteners",
    "Agriculture",
    "Fertilizers",
    "Power Drills",
];

/// Payment terms a sales order can carry
pub const PAYMENT_TERMS: [&str; 4] = [
    "30 days from date of invoice",
    "45 days from date of invoice",
    "60 days from date of invoice",
    "90 days from date of invoice",
];

/// Activity durations in days as (activity, mean, standard deviation)
pub const ACTIVITY_DURATIONS: [(&str, f64, f64); 14] = [
    (RECEIVE_PURCHASE_ORDER, 0.5, 0.2),
    ("Create Sales Order", 1.0, 0.5),
    ("Change Net Price in Sales Order", 0.5, 0.2),
    ("Change Material in Sales Order", 0.7, 0.3),
    ("Change Manual Price in Sales Order", 0.5, 0.2),
    (CREATE_DELIVERY, 2.0, 1.0),
    ("Create Shipment", 1.5, 0.7),
    ("Issue Goods", 1.0, 0.5),
    ("Create Invoice", 1.0, 0.5),
    ("Clear Invoice", 5.0, 2.0),
    ("Reject Sales Order", 0.5, 0.2),
    ("Cancel Sales Order Rejection", 1.0, 0.5),
    ("Deactivate Delivery Block", 1.0, 0.5),
    ("Deactivate Billing Block", 1.0, 0.5),
];
