//! Static topic definitions for the description segmenter.
//!
//! Keyword lists and header phrases are scoring/splitting tables evaluated
//! in the order given; do not re-sort them.

use navcat_core::Topic;

pub(super) struct TopicSpec {
    pub topic: Topic,
    pub title: &'static str,
    pub icon: &'static str,
    pub keywords: &'static [&'static str],
    /// Section title phrase that sometimes leaks into sentence bodies and
    /// must be stripped from points.
    pub title_pattern: Option<&'static str>,
    /// Hand-authored bullet always emitted as the section's first point.
    pub custom_first_point: Option<&'static str>,
}

/// Topic definitions in classification order. Keyword scoring uses a
/// strictly-greater comparison, so on ties the earlier entry here wins.
/// Classification order differs from the canonical emit order
/// ([`Topic::ALL`]): camera ranks above display here.
pub(super) const TOPIC_SPECS: [TopicSpec; 9] = [
    TopicSpec {
        topic: Topic::PackageInstallation,
        title: "Montaj ușor, tip Plug & Play",
        icon: "🔧",
        keywords: &[
            "pachet",
            "conține",
            "instalare",
            "montaj",
            "plug & play",
            "plug&play",
            "ram",
            "cabluri",
            "adaptoare",
            "fără modificări",
            "instalații electrice",
            "contactului",
            "accesorii",
            "unboxing",
            "detalii și ce conține",
        ],
        title_pattern: Some(r"^Montaj\s+ușor,?\s+tip\s+Plug\s*&\s*Play\s*"),
        custom_first_point: None,
    },
    TopicSpec {
        topic: Topic::VehicleIntegration,
        title: "Integrare Vehicul",
        icon: "🚗",
        keywords: &[
            "control de pe volan",
            "comenzi volan",
            "funcții volan",
            "steering wheel",
            "oprește automat",
            "scoaterea contactului",
            "compatibil cu comenzile",
            "aftermarket",
            "echipate din fabrică",
        ],
        title_pattern: None,
        custom_first_point: None,
    },
    TopicSpec {
        topic: Topic::SmartConnectivity,
        title: "CarPlay & Android Auto Wireless",
        icon: "📱",
        keywords: &[
            "carplay",
            "android auto",
            "wireless",
            "fără cabluri",
            "bluetooth",
            "hands-free",
            "wi-fi",
            "hotspot",
            "internet",
            "conexiune",
            "telefon",
            "siri",
            "google assistant",
            "comenzi vocale",
        ],
        title_pattern: Some(r"^(?:CarPlay\s*&\s*Android\s+Auto\s+Wireless|Play\s*&\s*Android\s+Auto\s+Wireless)\s*"),
        custom_first_point: None,
    },
    TopicSpec {
        topic: Topic::CameraSupport,
        title: "Compatibil cu cameră frontală, DVR și cameră de marșarier",
        icon: "📷",
        keywords: &[
            "cameră frontală",
            "cameră marsarier",
            "dvr",
            "camera auto",
            "înregistrarea traficului",
            "parcare",
            "manevre precise",
            "siguranță",
            "mersul înapoi",
            "camera",
            "camere",
        ],
        title_pattern: Some(r"^Compatibil\s+cu\s+cameră\s+frontală,?\s+DVR\s+și\s+cameră\s+de\s+marșarier\s*"),
        custom_first_point: None,
    },
    TopicSpec {
        topic: Topic::DisplayHardware,
        title: "Teme și Interfețe Preinstalate pe Tabletă",
        icon: "🎨",
        keywords: &[
            "procesor",
            "quad core",
            "octa core",
            "core",
            "ecran",
            "display",
            "incell",
            "qled",
            "oled",
            "luminozitate",
            "rezoluție",
            "tactil",
            "performanță",
            "culori",
            "claritate",
            "tehnologie",
            "2k",
            "4k",
            "inch",
            "diagonal",
            "interfețe preinstalate",
            "teme",
        ],
        title_pattern: Some(r"^Teme\s+și\s+Interfețe\s+Preinstalate\s+pe\s+Tabletă\s*"),
        custom_first_point: None,
    },
    TopicSpec {
        topic: Topic::AudioSound,
        title: "Sistem audio cu egalizator și Procesor DSP",
        icon: "🔊",
        keywords: &[
            "audio",
            "sunet",
            "egalizator",
            "dsp",
            "procesor digital",
            "calitate audio",
            "personalizare",
            "radio",
            "fm",
            "am",
            "rds",
            "posturi online",
            "redare",
            "muzică",
        ],
        title_pattern: Some(r"^Sistem\s+audio\s+cu\s+egalizator\s+și\s+Procesor\s+DSP\s*"),
        custom_first_point: Some(
            "Include un egalizator integrat și procesor digital de sunet (DSP), oferind \
             posibilitatea de a personaliza fin sunetul pentru o calitate audio superioară \
             adaptată interiorului mașinii",
        ),
    },
    TopicSpec {
        topic: Topic::Navigation,
        title: "Sistem de navigație GPS integrat",
        icon: "🗺️",
        keywords: &[
            "navigație",
            "gps",
            "hărți",
            "waze",
            "google maps",
            "maps",
            "orientare",
            "timp real",
            "trafic",
            "informații actualizate",
            "rutare",
            "localizare",
        ],
        title_pattern: Some(r"^Sistem\s+de\s+navigație\s+GPS\s+integrat\s*"),
        custom_first_point: None,
    },
    TopicSpec {
        topic: Topic::AdvancedFeatures,
        title: "Ecran Împărțit si Multitasking",
        icon: "🎮",
        keywords: &[
            "split screen",
            "ecran împărțit",
            "multitasking",
            "aplicații",
            "paralel",
            "două aplicații",
            "aplicații telefon",
            "multimedia",
            "personalizare",
            "android",
            "google play",
        ],
        title_pattern: Some(r"^Ecran\s+Împărțit\s+si?\s+Multitasking\s*"),
        custom_first_point: None,
    },
    TopicSpec {
        topic: Topic::AutoIntegration,
        title: "Senzori de parcare, climatizare și încălzire în scaune",
        icon: "⚙️",
        keywords: &[
            "senzori parcare",
            "climatizare",
            "încălzire scaune",
            "control climă",
            "vehicul compatibil",
            "funcții auto",
            "integrare",
            "gestionare",
            "scaune încălzite",
        ],
        title_pattern: Some(r"^Senzori\s+de\s+parcare,?\s+climatizare\s+și\s+încălzire\s+în\s+scaune\s*"),
        custom_first_point: None,
    },
];

/// Sentences with no keyword hits fall back to this topic.
pub(super) const DEFAULT_TOPIC: Topic = Topic::AdvancedFeatures;

/// Phrases that open a new chunk during splitting, before sentence-level
/// splitting runs inside each chunk.
pub(super) const TOPIC_HEADERS: [&str; 15] = [
    "Detalii și Ce Conține",
    "Montaj ușor",
    "Control de pe volan",
    "CarPlay & Android Auto",
    "Compatibil cu cameră",
    "Procesor",
    "Ecran INCELL",
    "Sistem audio",
    "Conexiune Wi-Fi",
    "Bluetooth",
    "Sistem de navigație",
    "Radio FM/AM",
    "Ecran Împărțit",
    "Senzori de parcare",
    "Teme și Interfețe",
];
