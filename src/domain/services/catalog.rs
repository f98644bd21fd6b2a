//! Static report catalog
//!
//! The fixed application profile, permission table, security checklist and
//! recommendations every report is assembled from.

use crate::domain::entities::{Permission, Polarity, RiskLevel, SecurityFinding};

/// Score assigned to every analyzed package
pub const MOCK_SECURITY_SCORE: u8 = 75;

/// Label of the only metadata field derived from the uploaded file
pub const APP_SIZE_LABEL: &str = "App Size";

/// One static application detail: label, value, listed in the text export
pub struct ProfileEntry {
    pub label: &'static str,
    pub value: &'static str,
    pub exported: bool,
}

const fn entry(label: &'static str, value: &'static str, exported: bool) -> ProfileEntry {
    ProfileEntry {
        label,
        value,
        exported,
    }
}

/// Application details in display order. App Size is inserted after Target SDK.
pub static APP_PROFILE: [ProfileEntry; 7] = [
    entry("Package Name", "com.example.futuristicapp", true),
    entry("Version Name", "2.1.0", true),
    entry("Version Code", "210", true),
    entry("Min SDK", "API 21 (Android 5.0)", true),
    entry("Target SDK", "API 33 (Android 13)", true),
    entry("Developer", "Futuristic Labs Inc.", true),
    entry("Install Location", "Internal Storage", false),
];

/// Index in the display order where App Size appears
pub const APP_SIZE_POSITION: usize = 5;

const PRIVACY_NOTE: &str = "Privacy-sensitive permission";

pub static PERMISSIONS: [Permission; 8] = [
    Permission {
        identifier: "android.permission.INTERNET",
        description: "Full network access",
        risk_level: RiskLevel::Normal,
        icon_ref: "fas fa-globe",
        note: "Required for app functionality",
    },
    Permission {
        identifier: "android.permission.READ_EXTERNAL_STORAGE",
        description: "Read from external storage",
        risk_level: RiskLevel::Normal,
        icon_ref: "fas fa-folder-open",
        note: "Standard file access",
    },
    Permission {
        identifier: "android.permission.WRITE_EXTERNAL_STORAGE",
        description: "Write to external storage",
        risk_level: RiskLevel::Dangerous,
        icon_ref: "fas fa-edit",
        note: "Can modify user files",
    },
    Permission {
        identifier: "android.permission.CAMERA",
        description: "Take pictures and record video",
        risk_level: RiskLevel::Dangerous,
        icon_ref: "fas fa-camera",
        note: PRIVACY_NOTE,
    },
    Permission {
        identifier: "android.permission.ACCESS_FINE_LOCATION",
        description: "Precise location access",
        risk_level: RiskLevel::Dangerous,
        icon_ref: "fas fa-map-marker-alt",
        note: PRIVACY_NOTE,
    },
    Permission {
        identifier: "android.permission.RECORD_AUDIO",
        description: "Record audio",
        risk_level: RiskLevel::Dangerous,
        icon_ref: "fas fa-microphone",
        note: PRIVACY_NOTE,
    },
    Permission {
        identifier: "android.permission.READ_CONTACTS",
        description: "Read contact information",
        risk_level: RiskLevel::Dangerous,
        icon_ref: "fas fa-address-book",
        note: PRIVACY_NOTE,
    },
    Permission {
        identifier: "android.permission.SEND_SMS",
        description: "Send SMS messages",
        risk_level: RiskLevel::Dangerous,
        icon_ref: "fas fa-sms",
        note: PRIVACY_NOTE,
    },
];

pub static SECURITY_FINDINGS: [SecurityFinding; 6] = [
    SecurityFinding {
        title: "Code Obfuscation",
        status: "Enabled",
        polarity: Polarity::Positive,
        icon_ref: "fas fa-shield-alt",
        export_status: "Enabled",
    },
    SecurityFinding {
        title: "SSL Pinning",
        status: "Not Detected",
        polarity: Polarity::Warning,
        icon_ref: "fas fa-lock",
        export_status: "Not Detected",
    },
    SecurityFinding {
        title: "Root Detection",
        status: "Enabled",
        polarity: Polarity::Positive,
        icon_ref: "fas fa-user-shield",
        export_status: "Enabled",
    },
    SecurityFinding {
        title: "Debug Mode",
        status: "Disabled",
        polarity: Polarity::Positive,
        icon_ref: "fas fa-bug",
        export_status: "Disabled",
    },
    SecurityFinding {
        title: "Backup Enabled",
        status: "Enabled",
        polarity: Polarity::Negative,
        icon_ref: "fas fa-database",
        export_status: "Yes (potential security risk)",
    },
    SecurityFinding {
        title: "Network Security",
        status: "Configured",
        polarity: Polarity::Positive,
        icon_ref: "fas fa-network-wired",
        export_status: "Configured",
    },
];

/// Closing advice of the text export; independent of the report content
pub static RECOMMENDATIONS: [&str; 5] = [
    "Implement SSL certificate pinning for enhanced network security",
    "Consider disabling backup functionality for sensitive apps",
    "Review dangerous permissions and implement runtime permission requests",
    "Ensure all network communications use HTTPS",
    "Implement additional anti-tampering measures",
];

/// Looks up a permission by its Android identifier
pub fn find_permission(identifier: &str) -> Option<&'static Permission> {
    PERMISSIONS.iter().find(|p| p.identifier == identifier)
}
