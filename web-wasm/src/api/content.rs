//! HTTP経由のコンテンツ読込
//!
//! サイトと同じオリジンから `/content/...` を取得する。
//! コレクションの一覧は各ディレクトリの `index.json` から読む。

use gloo::net::http::Request;
use portfolio_common::loader::{join_path, parse_manifest, MANIFEST_FILE};
use portfolio_common::{ContentSource, Error, Result};

#[derive(Debug, Clone, Default)]
pub struct HttpSource;

impl ContentSource for HttpSource {
    async fn read_text(&self, path: &str) -> Result<String> {
        let resp = Request::get(path)
            .send()
            .await
            .map_err(|e| Error::Load(format!("{}: {}", path, e)))?;

        if !resp.ok() {
            return Err(Error::Load(format!("{}: HTTP {}", path, resp.status())));
        }

        resp.text()
            .await
            .map_err(|e| Error::Load(format!("{}: {}", path, e)))
    }

    async fn list_collection(&self, dir: &str) -> Result<Vec<String>> {
        let manifest = self.read_text(&join_path(dir, MANIFEST_FILE)).await?;
        parse_manifest(&manifest)
    }
}
