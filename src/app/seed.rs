//! Initial intel fed to the ledger before the first tick.

use arkonis_data::RawRecord;

struct SeedRecord {
    recipient: &'static str,
    amount: f64,
    description: &'static str,
    category: &'static str,
}

const SEED_INTEL: [SeedRecord; 12] = [
    SeedRecord {
        recipient: "PALANTIR USG INC.",
        amount: 480_000_000.0,
        description: "MAVEN SMART SYSTEM: GEOINT AI INTEGRATION FOR REAL-TIME TARGET ACQUISITION & PATTERN OF LIFE ANALYSIS",
        category: "ARTIFICIAL INTELLIGENCE",
    },
    SeedRecord {
        recipient: "CLEARVIEW AI",
        amount: 4_200_000.0,
        description: "UNLIMITED LICENSE: FACIAL RECOGNITION DATABASE ACCESS FOR DHS/ICE - 30 BILLION IMAGE INDEX",
        category: "FACIAL RECOGNITION",
    },
    SeedRecord {
        recipient: "ANDURIL INDUSTRIES",
        amount: 98_000_000.0,
        description: "DIVR SYSTEM: AUTONOMOUS BORDER SENTRY TOWERS WITH INFRARED/THERMAL HUMAN DETECTION & TRACKING",
        category: "AUTONOMOUS WEAPON",
    },
    SeedRecord {
        recipient: "LEIDOS INC",
        amount: 24_000_000.0,
        description: "BIOMETRIC IDENTIFICATION SYSTEM (IDENT) MODERNIZATION: IRIS/FINGERPRINT/FACE FUSION FOR FBI",
        category: "BIOMETRIC",
    },
    SeedRecord {
        recipient: "GENERAL ATOMICS AERONAUTICAL",
        amount: 175_000_000.0,
        description: "MQ-9 REAPER AI UPGRADE: AUTONOMOUS FLIGHT & TARGET RECOGNITION MODULES FOR URBAN ENVIRONMENTS",
        category: "DRONE",
    },
    SeedRecord {
        recipient: "LEXISNEXIS SPECIAL SERVICES",
        amount: 16_500_000.0,
        description: "ACCURINT VIRTUAL CRIME CENTER: AGGREGATED SOCIAL MEDIA & UTILITY DATA FOR PREDICTIVE POLICING",
        category: "MASS DATA COLLECTION",
    },
    SeedRecord {
        recipient: "DATAMINR INC",
        amount: 12_000_000.0,
        description: "FIRST ALERT: REAL-TIME SOCIAL MEDIA MONITORING FOR CIVIL UNREST & DISSENT TRACKING",
        category: "SURVEILLANCE",
    },
    SeedRecord {
        recipient: "CELLEBRITE INC",
        amount: 8_500_000.0,
        description: "UNIVERSAL FORENSIC EXTRACTION DEVICE (UFED) FOR MOBILE DEVICE ENCRYPTION BYPASS",
        category: "SURVEILLANCE",
    },
    SeedRecord {
        recipient: "SHOTSPOTTER (SOUNDTHINKING)",
        amount: 5_400_000.0,
        description: "ACOUSTIC GUNSHOT DETECTION NETWORK: URBAN SENSORS WITH ALWAYS-ON AUDIO CAPTURE",
        category: "SURVEILLANCE",
    },
    SeedRecord {
        recipient: "IDEMIA IDENTITY & SECURITY",
        amount: 32_000_000.0,
        description: "NGI (NEXT GENERATION IDENTIFICATION): RAPID DNA PROFILING AND FACIAL MATCHING AT SCALE",
        category: "BIOMETRIC",
    },
    SeedRecord {
        recipient: "GABRIEL GABRIEL",
        amount: 1_500_000.0,
        description: "PREDICTIVE BEHAVIORAL ANALYTICS SUITE FOR INSIDER THREAT DETECTION",
        category: "BEHAVIORAL PREDICTION",
    },
    SeedRecord {
        recipient: "BANJO (UBICQUITY)",
        amount: 21_000_000.0,
        description: "EVENT DETECTION ENGINE: INTEGRATING CCTV, TRAFFIC CAMS, AND 911 CALLS FOR REAL-TIME SURVEILLANCE",
        category: "MASS DATA COLLECTION",
    },
];

#[must_use]
pub fn seed_records() -> Vec<RawRecord> {
    SEED_INTEL
        .iter()
        .map(|s| RawRecord {
            id: None,
            recipient: s.recipient.to_string(),
            amount: s.amount,
            description: s.description.to_string(),
            category: s.category.to_string(),
        })
        .collect()
}
