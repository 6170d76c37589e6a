//! フロントエンドから呼べるプレイヤーコマンド
//!
//! `label` は `YoutubePlayer::attach` 済みの webview ウィンドウのラベル。

use tauri::State;

use super::PlayerRegistry;
use crate::player::YoutubePlayer;
use crate::types::PlayerSnapshot;

fn player(registry: &State<'_, PlayerRegistry>, label: &str) -> Result<YoutubePlayer, String> {
    registry
        .player(label)
        .ok_or_else(|| "Player not attached".to_string())
}

#[tauri::command]
pub async fn load_video(
    registry: State<'_, PlayerRegistry>,
    label: String,
    video_id: String,
) -> Result<(), String> {
    player(&registry, &label)?
        .load_video(&video_id)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn load_playlist(
    registry: State<'_, PlayerRegistry>,
    label: String,
    playlist_id: String,
) -> Result<(), String> {
    player(&registry, &label)?
        .load_playlist(&playlist_id)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn play(registry: State<'_, PlayerRegistry>, label: String) -> Result<(), String> {
    player(&registry, &label)?.play().map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn pause(registry: State<'_, PlayerRegistry>, label: String) -> Result<(), String> {
    player(&registry, &label)?.pause().map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn stop(registry: State<'_, PlayerRegistry>, label: String) -> Result<(), String> {
    player(&registry, &label)?.stop().map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn seek(
    registry: State<'_, PlayerRegistry>,
    label: String,
    seconds: f32,
    allow_seek_ahead: bool,
) -> Result<(), String> {
    player(&registry, &label)?
        .seek_to(seconds, allow_seek_ahead)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn mute(registry: State<'_, PlayerRegistry>, label: String) -> Result<(), String> {
    player(&registry, &label)?.mute().map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn unmute(registry: State<'_, PlayerRegistry>, label: String) -> Result<(), String> {
    player(&registry, &label)?
        .un_mute()
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn set_shuffle(
    registry: State<'_, PlayerRegistry>,
    label: String,
    shuffle: bool,
) -> Result<(), String> {
    player(&registry, &label)?
        .set_shuffle(shuffle)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn previous_video(
    registry: State<'_, PlayerRegistry>,
    label: String,
) -> Result<(), String> {
    player(&registry, &label)?
        .previous_video()
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn next_video(registry: State<'_, PlayerRegistry>, label: String) -> Result<(), String> {
    player(&registry, &label)?
        .next_video()
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_player_state(
    registry: State<'_, PlayerRegistry>,
    label: String,
) -> Result<PlayerSnapshot, String> {
    Ok(player(&registry, &label)?.snapshot())
}

#[tauri::command]
pub async fn get_duration(
    registry: State<'_, PlayerRegistry>,
    label: String,
) -> Result<f64, String> {
    player(&registry, &label)?
        .duration()
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_current_time(
    registry: State<'_, PlayerRegistry>,
    label: String,
) -> Result<f64, String> {
    player(&registry, &label)?
        .current_time()
        .await
        .map_err(|e| e.to_string())
}
