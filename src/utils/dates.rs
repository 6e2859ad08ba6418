use chrono::{Datelike, NaiveDate, Utc};

const MESES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Fecha de hoy en formato ISO (YYYY-MM-DD), valor inicial del borrador.
pub fn today_iso() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Formatea una fecha ISO como "2 de enero de 2026". Acepta fechas con hora
/// (se ignora todo después del décimo carácter). Si no se puede interpretar,
/// devuelve la cadena original.
pub fn format_date_es(date: &str) -> String {
    let head: String = date.chars().take(10).collect();
    match NaiveDate::parse_from_str(&head, "%Y-%m-%d") {
        Ok(parsed) => {
            let mes = MESES[(parsed.month0()) as usize];
            format!("{} de {} de {}", parsed.day(), mes, parsed.year())
        }
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatea_fecha_iso() {
        assert_eq!(format_date_es("2026-08-26"), "26 de agosto de 2026");
    }

    #[test]
    fn formatea_fecha_con_hora() {
        assert_eq!(format_date_es("2025-01-02T10:30:00Z"), "2 de enero de 2025");
    }

    #[test]
    fn fecha_ilegible_queda_igual() {
        assert_eq!(format_date_es("no-es-fecha"), "no-es-fecha");
    }
}
