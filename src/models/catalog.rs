use serde::{Deserialize, Serialize};

/// Entrada de catálogo de referencia (empresas, solicitantes, proveedores,
/// servicios y rangos comparten la misma forma `{ id, name }`).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CatalogItem {
    pub id: u64,
    pub name: String,
}

/// Catálogo completo del formulario, cargado de una vez al montar la pantalla
/// con asignación determinista (sin carreras entre fetches sueltos).
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Catalog {
    pub companies: Vec<CatalogItem>,
    pub representatives: Vec<CatalogItem>,
    pub providers: Vec<CatalogItem>,
    pub services: Vec<CatalogItem>,
    pub units: Vec<CatalogItem>,
}

impl Catalog {
    pub fn unit_name(&self, unit_id: Option<u64>) -> Option<&str> {
        name_of(&self.units, unit_id)
    }
}

/// Nombre de un elemento de catálogo por id, si existe.
pub fn name_of(items: &[CatalogItem], id: Option<u64>) -> Option<&str> {
    let id = id?;
    items
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units() -> Vec<CatalogItem> {
        vec![
            CatalogItem { id: 1, name: "meses".into() },
            CatalogItem { id: 2, name: "semanas".into() },
        ]
    }

    #[test]
    fn busca_nombre_por_id() {
        let catalog = Catalog { units: units(), ..Catalog::default() };
        assert_eq!(catalog.unit_name(Some(1)), Some("meses"));
        assert_eq!(catalog.unit_name(Some(99)), None);
        assert_eq!(catalog.unit_name(None), None);
    }
}
