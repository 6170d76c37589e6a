//! ネイティブ側と埋め込みランタイムの間のメッセージブリッジ
//!
//! コマンドは一方向のスクリプト注入、イベントは予約スキームの
//! ナビゲーション横取りとして流れる。両チャネルは 1 つのランタイム
//! ハンドルを共有する。

pub mod command;
pub mod event;

use url::Url;

use crate::error::AppResult;

/// 埋め込みランタイムへのハンドル
///
/// 本番では webview、テストではフェイクが実装する。
pub trait EmbeddedRuntime: Send + Sync {
    /// スクリプト断片をランタイム内で実行する（fire-and-forget）
    fn run_script(&self, script: &str) -> AppResult<()>;

    /// レンダリング済みドキュメントをベースURL付きで読み込む
    fn load_document(&self, html: String, base_url: Url) -> AppResult<()>;
}
