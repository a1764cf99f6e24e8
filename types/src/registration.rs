//! The `info` document the host passes to a property inspector when it connects.
//!
//! Only `colors` drives theming; the rest is parsed so callers can log it and
//! so that unexpected values from newer host versions do not fail the parse.

use crate::palette::Palette;
use serde::{Deserialize, Serialize};

/// Environment information sent with the registration call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInfo {
    pub application: ApplicationInfo,
    #[serde(default)]
    pub plugin: Option<PluginInfo>,
    #[serde(default = "default_pixel_ratio")]
    pub device_pixel_ratio: u8,
    #[serde(default)]
    pub devices: Vec<DeviceInfo>,
    /// Current theme colors.
    pub colors: Palette,
}

fn default_pixel_ratio() -> u8 {
    1
}

impl RegistrationInfo {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationInfo {
    pub language: Language,
    pub platform: Platform,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginInfo {
    #[serde(default)]
    pub uuid: Option<String>,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub size: DeviceSize,
    /// Absent when the host runs without hardware attached.
    #[serde(rename = "type", default)]
    pub device_type: Option<DeviceType>,
}

/// Size of a device in keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSize {
    pub columns: u8,
    pub rows: u8,
}

/// UI language of the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    English,
    French,
    German,
    Spanish,
    Japanese,
    Korean,
    /// Simplified Chinese (zh_CN).
    ChineseChina,
    Unknown(String),
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        match value.as_str() {
            "en" => Language::English,
            "fr" => Language::French,
            "de" => Language::German,
            "es" => Language::Spanish,
            "ja" => Language::Japanese,
            "ko" => Language::Korean,
            "zh_CN" | "zh_cn" => Language::ChineseChina,
            _ => Language::Unknown(value),
        }
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        match language {
            Language::English => "en".to_string(),
            Language::French => "fr".to_string(),
            Language::German => "de".to_string(),
            Language::Spanish => "es".to_string(),
            Language::Japanese => "ja".to_string(),
            Language::Korean => "ko".to_string(),
            Language::ChineseChina => "zh_CN".to_string(),
            Language::Unknown(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Mac,
    Windows,
    Unknown(String),
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        match value.as_str() {
            "mac" => Platform::Mac,
            "windows" => Platform::Windows,
            _ => Platform::Unknown(value),
        }
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Mac => "mac".to_string(),
            Platform::Windows => "windows".to_string(),
            Platform::Unknown(value) => value,
        }
    }
}

/// Hardware model, sent as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub enum DeviceType {
    StreamDeck,
    StreamDeckMini,
    StreamDeckXl,
    StreamDeckMobile,
    CorsairGKeys,
    StreamDeckPedal,
    CorsairVoyager,
    StreamDeckPlus,
    Unknown(u64),
}

impl From<u64> for DeviceType {
    fn from(value: u64) -> Self {
        match value {
            0 => DeviceType::StreamDeck,
            1 => DeviceType::StreamDeckMini,
            2 => DeviceType::StreamDeckXl,
            3 => DeviceType::StreamDeckMobile,
            4 => DeviceType::CorsairGKeys,
            5 => DeviceType::StreamDeckPedal,
            6 => DeviceType::CorsairVoyager,
            7 => DeviceType::StreamDeckPlus,
            other => DeviceType::Unknown(other),
        }
    }
}

impl From<DeviceType> for u64 {
    fn from(device_type: DeviceType) -> Self {
        match device_type {
            DeviceType::StreamDeck => 0,
            DeviceType::StreamDeckMini => 1,
            DeviceType::StreamDeckXl => 2,
            DeviceType::StreamDeckMobile => 3,
            DeviceType::CorsairGKeys => 4,
            DeviceType::StreamDeckPedal => 5,
            DeviceType::CorsairVoyager => 6,
            DeviceType::StreamDeckPlus => 7,
            DeviceType::Unknown(value) => value,
        }
    }
}
