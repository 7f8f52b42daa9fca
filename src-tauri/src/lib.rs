use std::sync::{Arc, Mutex};

use doxysas_core::{ApiSettings, GeneratedResult, ResultStore};

/// Managed state wrapping the API settings.
struct SettingsState(Arc<Mutex<ApiSettings>>);

/// Managed state wrapping the generated-result list.
struct ResultsState(Arc<Mutex<ResultStore>>);

#[tauri::command]
fn get_api_settings(state: tauri::State<'_, SettingsState>) -> Result<serde_json::Value, String> {
    let settings = state.0.lock().unwrap().clone();
    // Mask API key — only send whether it's set
    Ok(serde_json::json!({
        "model": settings.model,
        "hasKey": !settings.api_key.is_empty(),
        "configured": doxysas_core::api_configured(&settings),
    }))
}

#[tauri::command]
fn save_api_key(api_key: String, state: tauri::State<'_, SettingsState>) -> Result<(), String> {
    let mut settings = state.0.lock().unwrap();
    // Empty input means "keep existing". Held in memory only for the rest
    // of the process; never written to disk.
    let trimmed = api_key.trim();
    if !trimmed.is_empty() {
        settings.api_key = trimmed.to_string();
    }
    Ok(())
}

#[tauri::command]
async fn generate_docs(
    code: String,
    settings: tauri::State<'_, SettingsState>,
    results: tauri::State<'_, ResultsState>,
) -> Result<serde_json::Value, String> {
    let settings = settings.0.lock().unwrap().clone();
    doxysas_gen::validate(&code, &settings)?;

    // On any failure the store is untouched and the error string goes
    // straight to the frontend.
    let result = doxysas_gen::generate(&code, &settings).await?;

    let mut store = results.0.lock().unwrap();
    let index = store.push(result.clone());
    Ok(serde_json::json!({ "index": index, "result": result }))
}

#[tauri::command]
fn list_results(state: tauri::State<'_, ResultsState>) -> Result<serde_json::Value, String> {
    let store = state.0.lock().unwrap();
    Ok(serde_json::json!({
        "filenames": store.filenames(),
        "current": store.current_index(),
    }))
}

#[tauri::command]
fn select_result(
    index: usize,
    state: tauri::State<'_, ResultsState>,
) -> Result<GeneratedResult, String> {
    let mut store = state.0.lock().unwrap();
    store.select(index)?;
    store
        .current()
        .cloned()
        .ok_or_else(|| "no documentation generated yet".to_string())
}

#[tauri::command]
fn current_result(
    state: tauri::State<'_, ResultsState>,
) -> Result<Option<GeneratedResult>, String> {
    Ok(state.0.lock().unwrap().current().cloned())
}

#[tauri::command]
fn read_source_file(path: String) -> Result<String, String> {
    std::fs::read_to_string(&path).map_err(|e| e.to_string())
}

#[tauri::command]
fn save_doc(path: String, state: tauri::State<'_, ResultsState>) -> Result<(), String> {
    let store = state.0.lock().unwrap();
    let entry = store
        .current()
        .ok_or_else(|| "no documentation generated yet".to_string())?;
    std::fs::write(&path, &entry.generated_doc).map_err(|e| e.to_string())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let settings = doxysas_core::read_settings();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_clipboard_manager::init())
        .manage(SettingsState(Arc::new(Mutex::new(settings))))
        .manage(ResultsState(Arc::new(Mutex::new(ResultStore::default()))))
        .invoke_handler(tauri::generate_handler![
            get_api_settings,
            save_api_key,
            generate_docs,
            list_results,
            select_result,
            current_result,
            read_source_file,
            save_doc,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
