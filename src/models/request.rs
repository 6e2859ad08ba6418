use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::dates::today_iso;

/// Borrador mutable del formulario. Se crea vacío al montar la pantalla y se
/// descarta al salir; los ids sin seleccionar quedan en None.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct RequestDraft {
    pub company_id: Option<u64>,
    pub representative_id: Option<u64>,
    pub requesting_area: String,
    pub justification: String,
    pub provider_id: Option<u64>,
    pub service_id: Option<u64>,
    pub quantity: u32,
    pub unit_id: Option<u64>,
    pub duration: u32,
    pub date: String,
}

impl RequestDraft {
    pub fn new() -> Self {
        Self {
            company_id: None,
            representative_id: None,
            requesting_area: String::new(),
            justification: String::new(),
            provider_id: None,
            service_id: None,
            quantity: 1,
            unit_id: None,
            duration: 1,
            date: today_iso(),
        }
    }
}

/// Partida del requerimiento. Una vez agregada a la lista no se muta;
/// solo se elimina por índice.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LineItem {
    pub provider_id: Option<u64>,
    pub service_id: Option<u64>,
    pub quantity: u32,
    pub unit_id: Option<u64>,
    pub duration: u32,
    pub unit_price: u64,
    pub subtotal: u64,
}

/// Carga útil del envío: el borrador más las partidas acumuladas y el total.
/// Se construye una sola vez al confirmar y no cambia después.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct RequisitionPayload {
    pub company_id: Option<u64>,
    pub representative_id: Option<u64>,
    pub requesting_area: String,
    pub justification: String,
    pub provider_id: Option<u64>,
    pub service_id: Option<u64>,
    pub quantity: u32,
    pub unit_id: Option<u64>,
    pub duration: u32,
    pub date: String,
    pub details: Vec<LineItem>,
    pub total: u64,
}

impl RequisitionPayload {
    pub fn from_parts(draft: &RequestDraft, details: &[LineItem], total: u64) -> Self {
        Self {
            company_id: draft.company_id,
            representative_id: draft.representative_id,
            requesting_area: draft.requesting_area.clone(),
            justification: draft.justification.clone(),
            provider_id: draft.provider_id,
            service_id: draft.service_id,
            quantity: draft.quantity,
            unit_id: draft.unit_id,
            duration: draft.duration,
            date: draft.date.clone(),
            details: details.to_vec(),
            total,
        }
    }
}

/// Respuesta de POST /add_request; el id identifica la orden generada.
/// Sin id el envío sigue siendo exitoso, solo que la orden no se puede
/// descargar.
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct SubmitResponse {
    #[serde(default)]
    pub request_id: Option<u64>,
}

#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct NamedRef {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct RecentRequestDetail {
    #[serde(default)]
    pub service: Option<NamedRef>,
}

/// Resumen de un requerimiento reciente (GET /requests/recent).
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct RecentRequest {
    pub id: u64,
    #[serde(default)]
    pub company: Option<NamedRef>,
    #[serde(default)]
    pub details: Vec<RecentRequestDetail>,
    #[serde(default)]
    pub date: Option<String>,
    // El backend devuelve el total a veces como número y a veces como cadena
    #[serde(default)]
    pub total: Option<Value>,
}

impl RecentRequest {
    pub fn company_name(&self) -> &str {
        self.company
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .unwrap_or("Empresa desconocida")
    }

    pub fn first_service_name(&self) -> &str {
        self.details
            .first()
            .and_then(|d| d.service.as_ref())
            .and_then(|s| s.name.as_deref())
            .unwrap_or("Servicio no especificado")
    }

    pub fn total_pen(&self) -> f64 {
        match &self.total {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s.parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RequestDraft {
        RequestDraft {
            company_id: Some(3),
            representative_id: Some(7),
            requesting_area: "Logística".into(),
            justification: "Renovación anual".into(),
            provider_id: Some(2),
            service_id: Some(5),
            quantity: 3,
            unit_id: Some(1),
            duration: 2,
            date: "2026-08-26".into(),
        }
    }

    fn item() -> LineItem {
        LineItem {
            provider_id: Some(2),
            service_id: Some(5),
            quantity: 3,
            unit_id: Some(1),
            duration: 2,
            unit_price: 1100,
            subtotal: 6600,
        }
    }

    #[test]
    fn payload_conserva_el_borrador_sin_cambios() {
        // Ida y vuelta: lo enviado es exactamente lo que muestra la vista previa
        let draft = draft();
        let items = vec![item()];
        let payload = RequisitionPayload::from_parts(&draft, &items, 6600);

        assert_eq!(payload.company_id, draft.company_id);
        assert_eq!(payload.representative_id, draft.representative_id);
        assert_eq!(payload.requesting_area, draft.requesting_area);
        assert_eq!(payload.justification, draft.justification);
        assert_eq!(payload.date, draft.date);
        assert_eq!(payload.details, items);
        assert_eq!(payload.total, 6600);
    }

    #[test]
    fn payload_serializa_las_claves_esperadas() {
        let payload = RequisitionPayload::from_parts(&draft(), &[item()], 6600);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["company_id"], 3);
        assert_eq!(json["justification"], "Renovación anual");
        assert_eq!(json["details"][0]["subtotal"], 6600);
        assert_eq!(json["details"][0]["unit_price"], 1100);
        assert_eq!(json["total"], 6600);
    }

    #[test]
    fn respuesta_de_envio_sin_id_sigue_siendo_exitosa() {
        // Un POST aceptado sin request_id no debe tratarse como error
        let response: SubmitResponse = serde_json::from_str("{}").unwrap();
        assert!(response.request_id.is_none());

        let response: SubmitResponse =
            serde_json::from_str(r#"{"request_id":42}"#).unwrap();
        assert_eq!(response.request_id, Some(42));
    }

    #[test]
    fn reciente_con_total_en_cadena_o_numero() {
        let body = r#"{"id":1,"company":{"name":"ACME"},"details":[{"service":{"name":"Limpieza"}}],"date":"2026-01-05","total":"1234.5"}"#;
        let recent: RecentRequest = serde_json::from_str(body).unwrap();
        assert_eq!(recent.company_name(), "ACME");
        assert_eq!(recent.first_service_name(), "Limpieza");
        assert_eq!(recent.total_pen(), 1234.5);

        let body = r#"{"id":2,"total":980}"#;
        let recent: RecentRequest = serde_json::from_str(body).unwrap();
        assert_eq!(recent.company_name(), "Empresa desconocida");
        assert_eq!(recent.first_service_name(), "Servicio no especificado");
        assert_eq!(recent.total_pen(), 980.0);
    }
}
