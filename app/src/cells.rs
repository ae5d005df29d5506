use calamine::{Data, DataType};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Vazio, texto vazio, zero e `false` contam como ausentes.
pub fn is_truthy(cell: Option<&Data>) -> bool {
    match cell {
        None | Some(Data::Empty) => false,
        Some(Data::String(s)) => !s.is_empty(),
        Some(Data::Int(i)) => *i != 0,
        Some(Data::Float(f)) => *f != 0.0,
        Some(Data::Bool(b)) => *b,
        Some(_) => true,
    }
}

/// Converte uma célula em texto. Células vazias viram `None`.
pub fn cell_text(cell: Option<&Data>) -> Option<String> {
    let cell = cell?;
    let text = match cell {
        Data::Empty => return None,
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        // Display de f64 já omite ".0" em valores inteiros (100000.0 -> "100000")
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(_) => match cell.as_datetime() {
            Some(dt) => dt.format(DATETIME_FORMAT).to_string(),
            None => cell.to_string(),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    };
    Some(text)
}

/// Texto da célula somente quando ela é "verdadeira".
pub fn truthy_text(cell: Option<&Data>) -> Option<String> {
    if is_truthy(cell) {
        cell_text(cell)
    } else {
        None
    }
}

/// Texto da célula quando não vazio. Diferente de `truthy_text`, zero vira "0".
pub fn non_empty_text(cell: Option<&Data>) -> Option<String> {
    cell_text(cell).filter(|text| !text.is_empty())
}
