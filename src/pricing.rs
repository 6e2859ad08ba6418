// ============================================================================
// PRICING - Tarifario fijo por unidad de tiempo
// ============================================================================
// El precio por unidad sale de una tabla estática de cinco rangos. Una unidad
// no reconocida no tiene precio y deshabilita el alta de la partida.
// ============================================================================

/// Precio por unidad de tiempo en PEN.
const PRICE_TABLE: [(&str, u64); 5] = [
    ("meses", 1100),
    ("semanas", 300),
    ("trimestres", 3300),
    ("semestres", 6600),
    ("años", 13200),
];

/// Precio por unidad para un rango reconocido.
pub fn unit_price(unit_name: &str) -> Option<u64> {
    PRICE_TABLE
        .iter()
        .find(|(name, _)| *name == unit_name)
        .map(|(_, price)| *price)
}

/// Subtotal de una partida: precio por unidad × duración × cantidad.
/// Sin precio, con duración o cantidad en cero, o si el producto no entra
/// en u64, no hay subtotal.
pub fn subtotal(unit_name: &str, duration: u32, quantity: u32) -> Option<u64> {
    if duration == 0 || quantity == 0 {
        return None;
    }
    unit_price(unit_name)?
        .checked_mul(duration as u64)?
        .checked_mul(quantity as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precios_de_los_cinco_rangos() {
        assert_eq!(unit_price("meses"), Some(1100));
        assert_eq!(unit_price("semanas"), Some(300));
        assert_eq!(unit_price("trimestres"), Some(3300));
        assert_eq!(unit_price("semestres"), Some(6600));
        assert_eq!(unit_price("años"), Some(13200));
    }

    #[test]
    fn rango_desconocido_sin_precio() {
        assert_eq!(unit_price("dias"), None);
        assert_eq!(unit_price(""), None);
        assert_eq!(subtotal("dias", 2, 3), None);
    }

    #[test]
    fn subtotal_meses_dos_por_tres() {
        // meses: 1100 × 2 × 3
        assert_eq!(subtotal("meses", 2, 3), Some(6600));
    }

    #[test]
    fn duracion_o_cantidad_cero_sin_subtotal() {
        assert_eq!(subtotal("meses", 0, 3), None);
        assert_eq!(subtotal("meses", 2, 0), None);
    }

    #[test]
    fn producto_desbordado_sin_subtotal() {
        // Valores enormes pero tipeables: la guardia deshabilita el alta
        // en vez de desbordar la multiplicación
        assert_eq!(subtotal("años", u32::MAX, u32::MAX), None);
        assert_eq!(subtotal("semanas", u32::MAX, 2_000_000_000), None);
    }
}
