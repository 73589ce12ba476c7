//! Keyword classification of extracted strings.
//!
//! Each string is lowercased once and tested against a skip-list of engine
//! internals, then against the bucket keyword sets in a fixed order. The
//! first set with a substring hit wins. Keyword sets overlap ("slide" is both
//! UI text and an asset name), so the order decides the outcome and must not
//! change.
//!
//! Every keyword set is compiled into an Aho-Corasick automaton once, so a
//! string is scanned a single time per set regardless of how many keywords
//! the set holds.

use crate::types::{Bucket, Classification};
use aho_corasick::AhoCorasick;
use std::sync::OnceLock;

/// Engine, UI-toolkit, networking and serializer internals. A hit here
/// discards the string even if it also carries a bucket keyword.
const SKIP_FRAGMENTS: &[&str] = &[
    // Converted .NET / cycript type system
    "converteddotnetcode",
    "stagingarea",
    "cycript",
    "cyctype",
    "cycmember",
    "cycclass",
    "cycobject",
    "cycmethod",
    "cycfield",
    "cycproperty",
    "cycparameter",
    "cyclocal",
    "cycgeneric",
    "cycnamespace",
    "cycattribute",
    "cycarray",
    "cycvalue",
    "$type",
    "_$type",
    // Runtime namespaces
    "system.",
    "unityengine.",
    "flash.",
    "adobe.",
    "actionscript3",
    "builtin",
    "serialize",
    "deserialize",
    "remappptrs",
    "constructor",
    "cil2as",
    "flashsupport",
    "platformdependent",
    "buildagent",
    "mscorlib",
    "getcomponent",
    "setactive",
    "findchild",
    // NGUI
    "nguitools",
    "uilabel",
    "uisprite",
    "uipanel",
    "uiwidget",
    "tweenposition",
    "tweenscale",
    "tweenalpha",
    "tweencolor",
    "tweenrotation",
    "itween_",
    "springpanel",
    "dragpanel",
    "uibutton",
    "uicheckbox",
    "uiinput",
    "uipopup",
    "uitext",
    "uiscroll",
    "uislider",
    "uigrid",
    "uitoggle",
    "uianchor",
    "uicamera",
    "uidrag",
    "uifilled",
    "uitable",
    "uisaved",
    "invstat",
    "invequip",
    "invattach",
    "invbase",
    "invgame",
    "invdatabase",
    // UNET
    "networkidentity",
    "networkbehaviour",
    "networkmanager",
    "networkserver",
    "networkclient",
    "networktransform",
    "syncvar",
    "clientrpc",
    "command_",
    "targetrpc",
    "spawnable",
    "unetplayer",
    "playercallbacks",
    "spawningbase",
    "noauth",
    "playerprefs",
    // Cross-compiled engine API stubs
    "monobehaviour_",
    "gameobject_",
    "transform_",
    "component_",
    "object_",
    "debug_",
    "application_",
    "mathf_",
    "vector3_",
    "quaternion_",
    "color_",
    "time_",
    "input_",
    "screen_",
    "physics_",
    "renderer_",
    "collider_",
    "rigidbody_",
    "camera_",
    "light_",
    "animation_",
    "audiolistener_",
    "audiosource_",
    "particleemitter_",
    "particle",
    "mesh_",
    "skinned",
    "texture_",
    "material_",
    "shader_",
    "render",
    "gui_",
    "guilayout",
    "guistyle",
    "guitext",
    "guitexture",
];

const URL_KEYWORDS: &[&str] = &["http", "www."];

const SOCIAL_KEYWORDS: &[&str] = &["facebook", "fb_", "tweet", "twitter"];

const MUSIC_KEYWORDS: &[&str] = &[".mp3", ".wav", ".ogg", "music", "song", "audio", "sound"];

const GAME_TEXT_KEYWORDS: &[&str] = &[
    "most dope",
    "my team",
    "score",
    "press ",
    "click ",
    "enter ",
    "type ",
    "your name",
    "game over",
    "retry",
    "play",
    "start",
    "prize",
    "claim",
    "congrat",
    "level",
    "high score",
    "best",
    "points",
    "welcome",
    "slide",
    "blue",
];

const ASSET_KEYWORDS: &[&str] = &[
    ".prefab",
    "prefab",
    "ice_cream",
    "icecream",
    "obstacle",
    "obsticle",
    "victory",
    "tree",
    "building",
    "mac_",
    "player",
    "slide",
    "camera",
    "piece",
];

const DEVELOPER_KEYWORDS: &[&str] = &[
    "pla",
    "studio",
    "v21",
    "version",
    "build",
    "developer",
    "author",
    "copyright",
    "vnetrix",
    "umg",
];

const CONFIG_KEYWORDS: &[&str] = &[
    "speed",
    "spawn",
    "angle",
    "death",
    "bonus",
    "multiplier",
    "difficulty",
    "random",
    "chance",
    "width",
    "height",
    "radius",
    "distance",
    "timer",
    "cooldown",
    "interval",
    "threshold",
    "lerpspeed",
    "maxspeed",
    "minspeed",
];

const NETWORK_KEYWORDS: &[&str] = &[
    "hash",
    "sha1",
    "salt",
    "secret",
    "key",
    "leaderboard",
    "rank",
    "submit",
    "upload",
    "fetch",
    "poke",
    "request",
    "response",
    "user_id",
    "userid",
    "postscor",
];

/// Class names from the game's own scripts.
const GAME_CLASS_FRAGMENTS: &[&str] = &[
    "slidecontroller",
    "slidermovement",
    "scoremanager",
    "deadmenu",
    "startmenu",
    "camfollow",
    "textentry",
    "slidemesh",
    "slidepiece",
    "victoryball",
    "obsticlecollider",
    "externalcall",
    "httppoke",
    "leaderboard",
];

/// Bucket rules in evaluation order. A rule matches if any keyword from any
/// of its sets occurs in the lowercased string.
const RULES: &[(Bucket, &[&[&str]])] = &[
    (Bucket::Urls, &[URL_KEYWORDS]),
    (Bucket::Social, &[SOCIAL_KEYWORDS]),
    (Bucket::Music, &[MUSIC_KEYWORDS]),
    (Bucket::GameText, &[GAME_TEXT_KEYWORDS]),
    (Bucket::Assets, &[ASSET_KEYWORDS]),
    (Bucket::Developer, &[DEVELOPER_KEYWORDS]),
    (Bucket::Config, &[CONFIG_KEYWORDS]),
    (Bucket::NetworkOrMisc, &[NETWORK_KEYWORDS, GAME_CLASS_FRAGMENTS]),
];

struct Matchers {
    skip: AhoCorasick,
    rules: Vec<(Bucket, AhoCorasick)>,
}

/// Build and cache the skip-list and per-bucket automata.
fn get_matchers() -> &'static Matchers {
    static CACHE: OnceLock<Matchers> = OnceLock::new();
    CACHE.get_or_init(|| {
        let skip = AhoCorasick::new(SKIP_FRAGMENTS).expect("Failed to build skip automaton");
        let rules = RULES
            .iter()
            .map(|(bucket, sets)| {
                let patterns: Vec<&str> = sets.iter().flat_map(|set| set.iter().copied()).collect();
                let ac = AhoCorasick::new(&patterns).expect("Failed to build bucket automaton");
                (*bucket, ac)
            })
            .collect();
        Matchers { skip, rules }
    })
}

/// Classify a string into a bucket, or report why it is not reported.
pub fn classify(s: &str) -> Classification {
    let lower = s.to_lowercase();
    let matchers = get_matchers();

    if matchers.skip.is_match(&lower) {
        return Classification::Skipped;
    }

    matchers
        .rules
        .iter()
        .find(|(_, ac)| ac.is_match(&lower))
        .map_or(Classification::Unmatched, |(bucket, _)| {
            Classification::Bucket(*bucket)
        })
}

/// Returns true if the string names an engine or framework internal.
pub fn is_skipped(s: &str) -> bool {
    get_matchers().skip.is_match(&s.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket_of(s: &str) -> Option<Bucket> {
        classify(s).bucket()
    }

    #[test]
    fn test_urls() {
        assert_eq!(bucket_of("http://example.com"), Some(Bucket::Urls));
        assert_eq!(bucket_of("WWW.MACMILLER.COM"), Some(Bucket::Urls));
    }

    #[test]
    fn test_url_beats_social() {
        assert_eq!(
            bucket_of("https://graph.facebook.com/me"),
            Some(Bucket::Urls)
        );
        assert_eq!(bucket_of("share on facebook"), Some(Bucket::Social));
        assert_eq!(bucket_of("TweetThisScore"), Some(Bucket::Social));
    }

    #[test]
    fn test_music_before_game_text() {
        assert_eq!(bucket_of("blue_slide_park.mp3"), Some(Bucket::Music));
        assert_eq!(bucket_of("MusicVolume"), Some(Bucket::Music));
    }

    #[test]
    fn test_slide_is_game_text_not_asset() {
        assert_eq!(bucket_of("SlideDown"), Some(Bucket::GameText));
        assert_eq!(bucket_of("Game Over"), Some(Bucket::GameText));
    }

    #[test]
    fn test_assets() {
        assert_eq!(bucket_of("IceCreamTruck"), Some(Bucket::Assets));
        assert_eq!(bucket_of("obsticle_big"), Some(Bucket::Assets));
    }

    #[test]
    fn test_developer() {
        assert_eq!(bucket_of("Copyright 2012"), Some(Bucket::Developer));
        assert_eq!(bucket_of("vnetrix games"), Some(Bucket::Developer));
    }

    #[test]
    fn test_config() {
        assert_eq!(bucket_of("maxSpeed"), Some(Bucket::Config));
        assert_eq!(bucket_of("cooldown_ms"), Some(Bucket::Config));
    }

    #[test]
    fn test_network_and_class_names() {
        assert_eq!(bucket_of("secretSalt"), Some(Bucket::NetworkOrMisc));
        assert_eq!(bucket_of("DeadMenu"), Some(Bucket::NetworkOrMisc));
        assert_eq!(bucket_of("CamFollow"), Some(Bucket::NetworkOrMisc));
    }

    #[test]
    fn test_skip_list_takes_precedence() {
        assert_eq!(classify("unityengine.transform"), Classification::Skipped);
        assert_eq!(classify("UILabel_score_display"), Classification::Skipped);
        assert_eq!(classify("http://system.example"), Classification::Skipped);
        assert!(is_skipped("ParticleSystem"));
        assert!(!is_skipped("http://example.com"));
    }

    #[test]
    fn test_unmatched() {
        assert_eq!(classify("hello!"), Classification::Unmatched);
        assert_eq!(classify("zzzzzzzz"), Classification::Unmatched);
    }

    #[test]
    fn test_deterministic() {
        for s in ["SlideDown", "hello!", "unityengine.x", "maxSpeed"] {
            assert_eq!(classify(s), classify(s));
        }
    }

    #[test]
    fn test_rule_order_matches_precedence() {
        let order: Vec<Bucket> = RULES.iter().map(|(b, _)| *b).collect();
        assert_eq!(
            order,
            vec![
                Bucket::Urls,
                Bucket::Social,
                Bucket::Music,
                Bucket::GameText,
                Bucket::Assets,
                Bucket::Developer,
                Bucket::Config,
                Bucket::NetworkOrMisc,
            ]
        );
    }
}
