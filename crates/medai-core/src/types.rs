//! Core domain types for the MedAI playground

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Sections
// ─────────────────────────────────────────────────────────────────────────────

/// One narrative panel of the interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Stable identifier (unique within the registry)
    pub id: &'static str,
    /// Navigation title, shown in the palette and indicators
    pub title: &'static str,
}

impl Section {
    pub const fn new(id: &'static str, title: &'static str) -> Self {
        Self { id, title }
    }
}

/// Sections in navigation order
pub const SECTIONS: [Section; 6] = [
    Section::new("hero", "Inicio"),
    Section::new("problem", "El Problema"),
    Section::new("pipeline", "Pipeline"),
    Section::new("playground", "Playground"),
    Section::new("results", "Resultados"),
    Section::new("ethics", "Ética"),
];

// ─────────────────────────────────────────────────────────────────────────────
// Language
// ─────────────────────────────────────────────────────────────────────────────

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish (primary)
    #[default]
    Es,
    /// English (secondary)
    En,
}

impl Language {
    /// Short language tag
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    /// The other language
    pub fn toggled(&self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            other => Err(Error::config_invalid(format!(
                "unknown language tag '{}' (expected 'es' or 'en')",
                other
            ))),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Categories
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed set of medical literature labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Oncology,
    Cardiology,
    Epidemiology,
    ClinicalTrial,
    SystematicReview,
    DiagnosticImaging,
    Neurology,
}

impl Category {
    /// All categories in canonical (matrix) order
    pub const ALL: [Category; 7] = [
        Category::Oncology,
        Category::Cardiology,
        Category::Epidemiology,
        Category::ClinicalTrial,
        Category::SystematicReview,
        Category::DiagnosticImaging,
        Category::Neurology,
    ];

    /// Position in [`Category::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Category::Oncology => 0,
            Category::Cardiology => 1,
            Category::Epidemiology => 2,
            Category::ClinicalTrial => 3,
            Category::SystematicReview => 4,
            Category::DiagnosticImaging => 5,
            Category::Neurology => 6,
        }
    }

    /// Localized display label
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Category::Oncology, Language::Es) => "Oncología",
            (Category::Oncology, Language::En) => "Oncology",
            (Category::Cardiology, Language::Es) => "Cardiología",
            (Category::Cardiology, Language::En) => "Cardiology",
            (Category::Epidemiology, Language::Es) => "Epidemiología",
            (Category::Epidemiology, Language::En) => "Epidemiology",
            (Category::ClinicalTrial, Language::Es) => "Ensayo clínico",
            (Category::ClinicalTrial, Language::En) => "Clinical trial",
            (Category::SystematicReview, Language::Es) => "Revisión sistemática",
            (Category::SystematicReview, Language::En) => "Systematic review",
            (Category::DiagnosticImaging, Language::Es) => "Diagnóstico por imagen",
            (Category::DiagnosticImaging, Language::En) => "Diagnostic imaging",
            (Category::Neurology, Language::Es) => "Neurología",
            (Category::Neurology, Language::En) => "Neurology",
        }
    }

    /// Three-letter abbreviation used in the confusion matrix header
    pub fn abbreviation(&self) -> String {
        self.label(Language::Es).chars().take(3).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Predictions
// ─────────────────────────────────────────────────────────────────────────────

/// One ranked classifier output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub category: Category,
    /// Probability in [0, 1]
    pub probability: f64,
    /// Model confidence in [0, 1]
    pub confidence: f64,
}

impl Prediction {
    pub fn new(category: Category, probability: f64, confidence: f64) -> Self {
        Self {
            category,
            probability,
            confidence,
        }
    }

    /// Probability formatted as a percentage with one decimal ("82.4%")
    pub fn probability_percent(&self) -> String {
        format!("{:.1}%", self.probability * 100.0)
    }

    /// Confidence formatted as a percentage with one decimal
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}
