//! URL paths of the JurisREM API, relative to the configured base URL.
//!
//! Identifiers are percent-encoded before being spliced into a path.

use urlencoding::encode;

pub mod processos {
    use super::encode;

    pub const LISTAGEM: &str = "/processos/listagem";
    pub const CRIAR: &str = "/processos/criar_processo";

    pub fn by_id(id: &str) -> String {
        format!("/processos/{}", encode(id))
    }

    pub fn movimentacoes(id: &str) -> String {
        format!("/processos/{}/movimentacoes", encode(id))
    }

    pub fn documentos(id: &str) -> String {
        format!("/processos/{}/documentos", encode(id))
    }
}

pub mod movimentacoes {
    use super::encode;

    pub const CRIAR: &str = "/movimentacoes";

    pub fn by_id(id: &str) -> String {
        format!("/movimentacoes/{}", encode(id))
    }
}

pub mod documentos {
    use super::encode;

    pub const UPLOAD: &str = "/documentos";

    pub fn by_id(id: &str) -> String {
        format!("/documentos/{}", encode(id))
    }

    pub fn download(id: &str) -> String {
        format!("/documentos/{}/download", encode(id))
    }
}
