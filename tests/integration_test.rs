use assert_approx_eq::assert_approx_eq;

use crop_advisor::{
    analysis::{rank_all, recommend, recommend_from, Advisor},
    chat::{reply, ChatMessage, Conversation, Lang, Role},
    config::AdvisorConfig,
    error::AdvisorError,
    io::{self, load_lang, load_state, save_lang, save_state, PersistedState},
    models::{crop_profiles, CropProfile, FarmInput, Range, SoilType},
    platform::{FileStore, KeyValueStore, LineListener, MemoryStore, TranscriptSpeaker},
};

fn clay_rainfed() -> FarmInput {
    FarmInput {
        soil: SoilType::Clay,
        rainfall: 1500.0,
        temp: 30.0,
        ph: 6.0,
        acreage: 1.0,
        irrigation: false,
        budget: 0.0,
        previous_crop: String::new(),
    }
}

// --- Recommendation engine ---

#[test]
fn test_default_farm_recommendations() {
    let recs = recommend(&FarmInput::default());
    let crops: Vec<&str> = recs.iter().map(|r| r.crop.as_str()).collect();
    assert_eq!(crops, vec!["Chickpea", "Maize", "Rice"]);

    assert_approx_eq!(recs[0].yield_t_per_ha, 2.5272, 1e-9);
    assert_approx_eq!(recs[0].profit_per_ha, 152.8956, 1e-9);
    assert_eq!(recs[0].sustainability, 98);

    assert_approx_eq!(recs[1].yield_t_per_ha, 7.02, 1e-9);
    assert_approx_eq!(recs[1].profit_per_ha, 135.135, 1e-9);
    assert_eq!(recs[1].sustainability, 98);

    assert_approx_eq!(recs[2].yield_t_per_ha, 6.0696, 1e-9);
    assert_approx_eq!(recs[2].profit_per_ha, 126.9421065, 1e-9);
    assert_eq!(recs[2].sustainability, 91);
}

#[test]
fn test_clay_rainfed_recommendations() {
    let recs = recommend(&clay_rainfed());
    let crops: Vec<&str> = recs.iter().map(|r| r.crop.as_str()).collect();
    assert_eq!(crops, vec!["Chickpea", "Rice", "Maize"]);
    assert_approx_eq!(recs[1].profit_per_ha, 109.098, 1e-9);
    assert_eq!(recs[1].sustainability, 95);
}

#[test]
fn test_rank_all_keeps_every_crop_in_order() {
    let ranked = rank_all(&FarmInput::default(), crop_profiles());
    let crops: Vec<&str> = ranked.iter().map(|a| a.crop.as_str()).collect();
    assert_eq!(crops, vec!["Chickpea", "Maize", "Rice", "Wheat", "Mustard"]);
    assert_approx_eq!(ranked[3].recommendation.profit_per_ha, 100.20736, 1e-9);
    assert_approx_eq!(ranked[4].recommendation.profit_per_ha, 96.848136, 1e-9);
}

#[test]
fn test_previous_crop_gets_no_rotation_bonus() {
    let ranked = rank_all(&FarmInput::default(), crop_profiles());
    let wheat = ranked.iter().find(|a| a.crop == "Wheat").unwrap();
    assert_eq!(wheat.rotation_bonus, 1.0);
    let maize = ranked.iter().find(|a| a.crop == "Maize").unwrap();
    assert_eq!(maize.rotation_bonus, 1.08);
}

#[test]
fn test_custom_catalog() {
    static SORGHUM: [CropProfile; 1] = [CropProfile {
        name: "Sorghum",
        base_yield: 3.0,
        price: 20_000.0,
        rainfall: Range::new(400.0, 1000.0),
        temp: Range::new(20.0, 35.0),
        ph: Range::new(5.5, 8.0),
        soils: &[SoilType::Loam, SoilType::Clay],
        water_intensive: false,
    }];

    let advisor = Advisor::new(&SORGHUM);
    let recs = advisor.recommend(&FarmInput::default());
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].crop, "Sorghum");
    assert_eq!(recommend_from(&FarmInput::default(), &SORGHUM), recs);
}

#[test]
fn test_empty_catalog_gives_nothing() {
    let advisor = Advisor::new(&[]);
    assert!(advisor.recommend(&FarmInput::default()).is_empty());
    assert!(advisor.top(&FarmInput::default()).is_none());
}

// --- Chat flow ---

#[test]
fn test_conversation_round_trip_through_store() {
    let mut store = MemoryStore::new();
    let input = FarmInput::default();
    let recs = recommend(&input);

    let mut convo = Conversation::new();
    let mut listener = LineListener::new("what should I plant\n".as_bytes());
    let mut speaker = TranscriptSpeaker::new(Vec::new());
    assert!(convo.listen(&mut listener, Lang::En));
    let answer = convo.send(&recs, Lang::En, &mut speaker).unwrap().text.clone();
    assert!(answer.starts_with("Based on your data, Chickpea"));

    save_state(
        &mut store,
        &PersistedState {
            form: Some(input.clone()),
            messages: convo.messages().to_vec(),
        },
    )
    .unwrap();
    save_lang(&mut store, Lang::Hi).unwrap();

    let restored = load_state(&store).unwrap().unwrap();
    assert_eq!(restored.form, Some(input));
    assert_eq!(restored.messages.len(), 2);
    assert_eq!(restored.messages[0], ChatMessage::user("what should I plant"));
    assert_eq!(restored.messages[1].role, Role::Ai);
    assert_eq!(load_lang(&store, None).unwrap(), Lang::Hi);

    let spoken = String::from_utf8(speaker.into_inner()).unwrap();
    assert!(spoken.starts_with("[en-IN] Based on your data"));
}

#[test]
fn test_reply_matches_first_recommendation() {
    let recs = recommend(&clay_rainfed());
    let answer = reply(&recs, Lang::En, false).unwrap();
    assert!(answer.contains("Chickpea"));
    assert!(answer.contains("profit ₹115 per ha"));
    assert!(answer.contains("sustainability 91%"));
}

#[test]
fn test_file_store_persists_between_opens() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = FileStore::open(dir.path()).unwrap();
        save_lang(&mut store, Lang::Hi).unwrap();
    }
    let store = FileStore::open(dir.path()).unwrap();
    assert_eq!(store.get("krishiai_lang").unwrap().as_deref(), Some("hi"));
}

#[test]
fn test_corrupt_state_is_ignored() {
    let mut store = MemoryStore::new();
    store.set("krishiai_state", "{not json").unwrap();
    assert!(load_state(&store).unwrap().is_none());
}

// --- Input files and config ---

#[test]
fn test_read_farm_input_json_and_toml() {
    let dir = tempfile::tempdir().unwrap();

    let json_path = dir.path().join("farm.json");
    std::fs::write(&json_path, serde_json::to_string(&clay_rainfed()).unwrap()).unwrap();
    assert_eq!(io::read_farm_input(&json_path).unwrap(), clay_rainfed());

    let toml_path = dir.path().join("farm.toml");
    std::fs::write(
        &toml_path,
        "soil = \"sandy\"\nrainfall = 500.0\ntemp = 22.0\nph = 7.0\nirrigation = true\nbudget = 1000.0\n",
    )
    .unwrap();
    let farm = io::read_farm_input(&toml_path).unwrap();
    assert_eq!(farm.soil, SoilType::Sandy);
    assert!(farm.previous_crop.is_empty());
}

#[test]
fn test_read_farm_input_rejects_unknown_extension() {
    let err = io::read_farm_input("farm.xlsx").unwrap_err();
    assert!(matches!(err, AdvisorError::ParseError(_)));
}

#[test]
fn test_write_recommendations_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recs.json");
    io::write_recommendations(&recommend(&FarmInput::default()), &path, true).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value[0]["crop"], "Chickpea");
    assert_approx_eq!(value[0]["yieldTPerHa"].as_f64().unwrap(), 2.5272, 1e-9);
}

#[test]
fn test_config_drives_default_farm() {
    let config = AdvisorConfig::from_toml_str(
        "language = \"hi\"\n[farm]\nsoil = \"clay\"\nrainfall = 1500.0\ntemp = 30.0\nph = 6.0\nirrigation = false\nbudget = 0.0\nprevious_crop = \"\"\n",
    )
    .unwrap();
    assert_eq!(config.language, Some(Lang::Hi));
    assert_eq!(config.default_farm().unwrap(), clay_rainfed());
}
