// src/common/validation.rs

use validator::ValidationError;

/// Telefone no formato brasileiro `(xx) xxxx-xxxx`.
pub fn is_valid_phone(phone: &str) -> bool {
    let bytes = phone.as_bytes();
    if bytes.len() != 14 {
        return false;
    }
    let digit = |i: usize| bytes[i].is_ascii_digit();
    bytes[0] == b'('
        && digit(1)
        && digit(2)
        && bytes[3] == b')'
        && bytes[4] == b' '
        && digit(5)
        && digit(6)
        && digit(7)
        && digit(8)
        && bytes[9] == b'-'
        && digit(10)
        && digit(11)
        && digit(12)
        && digit(13)
}

/// Checagem mínima de e-mail: algo antes do `@`, domínio com ponto, sem espaços.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn is_valid_password(password: &str) -> bool {
    password.len() >= 6
}

/// Horário de grade no formato `HH:MM`, 24h, minutos em 00 ou 30.
pub fn is_valid_slot_time(time: &str) -> bool {
    let Some((hour, minute)) = time.split_once(':') else {
        return false;
    };
    if hour.len() != 2 || minute.len() != 2 {
        return false;
    }
    let Ok(hour) = hour.parse::<u32>() else {
        return false;
    };
    hour < 24 && (minute == "00" || minute == "30")
}

// --- Funções customizadas para o `validator` (mesmo padrão dos payloads) ---

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if is_valid_phone(phone) {
        return Ok(());
    }
    let mut err = ValidationError::new("phone_format");
    err.message = Some("O telefone deve estar no formato (xx) xxxx-xxxx.".into());
    Err(err)
}

pub fn validate_slot_time(time: &str) -> Result<(), ValidationError> {
    if is_valid_slot_time(time) {
        return Ok(());
    }
    let mut err = ValidationError::new("slot_time");
    err.message = Some("O horário deve estar no formato HH:MM, em intervalos de 30 minutos.".into());
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_br_landline_format() {
        assert!(is_valid_phone("(11) 9999-9999"));
        assert!(is_valid_phone("(21) 3456-7890"));
    }

    #[test]
    fn phone_rejects_other_shapes() {
        assert!(!is_valid_phone("11 9999-9999"));
        assert!(!is_valid_phone("(11) 99999-9999"));
        assert!(!is_valid_phone("(11) 9999 9999"));
        assert!(!is_valid_phone("(ab) cdef-ghij"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn email_requires_at_and_dotted_domain() {
        assert!(is_valid_email("maria.silva@email.com"));
        assert!(!is_valid_email("maria.silva"));
        assert!(!is_valid_email("maria@email"));
        assert!(!is_valid_email("maria @email.com"));
        assert!(!is_valid_email("@email.com"));
    }

    #[test]
    fn password_minimum_is_six_chars() {
        assert!(is_valid_password("123456"));
        assert!(!is_valid_password("12345"));
    }

    #[test]
    fn slot_time_is_half_hour_grid() {
        assert!(is_valid_slot_time("09:00"));
        assert!(is_valid_slot_time("17:30"));
        assert!(!is_valid_slot_time("9:00"));
        assert!(!is_valid_slot_time("09:15"));
        assert!(!is_valid_slot_time("24:00"));
        assert!(!is_valid_slot_time("0900"));
    }
}
