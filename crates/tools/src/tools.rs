//! The two reservation tools and their dispatch.

use lumen_core::{
    locale::NO_SLOTS_MESSAGE,
    models::{
        reservation::{
            CreateReservationRequest, DEFAULT_DURATION_MINUTES, MAX_DURATION_MINUTES, MAX_PARTY_SIZE,
            MIN_DURATION_MINUTES, MIN_PARTY_SIZE,
        },
        time_slot::CheckScheduleRequest,
    },
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::client::ReservationApi;

pub const CHECK_SCHEDULE: &str = "check_restaurant_schedule";
pub const CREATE_RESERVATION: &str = "create_reservation";

/// Text result of a tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    /// The `tools/call` result object.
    pub fn to_json(&self) -> Value {
        json!({
            "content": [{ "type": "text", "text": self.text }],
            "isError": self.is_error,
        })
    }
}

/// Tool descriptors returned by `tools/list`.
pub fn definitions() -> Value {
    json!([
        {
            "name": CHECK_SCHEDULE,
            "description": "Consulta los horarios disponibles de un restaurante para una fecha. Devuelve los horarios de inicio en los que hay mesas libres.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "restaurant_id": {
                        "type": "string",
                        "description": "UUID del restaurante"
                    },
                    "date": {
                        "type": "string",
                        "description": "Fecha a consultar en formato ISO 8601 (ej: 2024-01-20T00:00:00.000Z)"
                    }
                },
                "required": ["restaurant_id", "date"]
            }
        },
        {
            "name": CREATE_RESERVATION,
            "description": "Crea una nueva reserva en el restaurante con asignación automática de mesa. El sistema busca una mesa disponible que cumpla con la capacidad requerida y que no tenga conflictos de horario.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "restaurant_id": {
                        "type": "string",
                        "description": "UUID del restaurante"
                    },
                    "client_id": {
                        "type": "string",
                        "description": "UUID del cliente"
                    },
                    "reservation_date": {
                        "type": "string",
                        "description": "Fecha y hora de la reserva en formato ISO 8601 (ej: 2024-01-20T20:00:00.000Z)"
                    },
                    "party_size": {
                        "type": "integer",
                        "description": "Número de personas (1-50)",
                        "minimum": MIN_PARTY_SIZE,
                        "maximum": MAX_PARTY_SIZE
                    },
                    "duration_minutes": {
                        "type": "integer",
                        "description": "Duración de la reserva en minutos (30-480). Por defecto: 120",
                        "minimum": MIN_DURATION_MINUTES,
                        "maximum": MAX_DURATION_MINUTES,
                        "default": DEFAULT_DURATION_MINUTES
                    }
                },
                "required": ["restaurant_id", "client_id", "reservation_date", "party_size"]
            }
        }
    ])
}

fn parse_arguments<T: DeserializeOwned>(name: &str, arguments: Option<Value>) -> Result<T, ToolOutput> {
    let arguments = arguments
        .filter(Value::is_object)
        .ok_or_else(|| ToolOutput::error(format!("Argumentos inválidos para {}", name)))?;

    serde_json::from_value(arguments)
        .map_err(|e| ToolOutput::error(format!("Argumentos inválidos para {}: {}", name, e)))
}

async fn check_schedule(api: &dyn ReservationApi, request: CheckScheduleRequest) -> ToolOutput {
    if let Err(e) = request.validate() {
        return ToolOutput::error(format!("Error al consultar horarios: {}", e));
    }

    match api.check_schedule(request).await {
        Ok(envelope) if envelope.success => {
            let message = envelope.data.message;
            if message.is_empty() {
                ToolOutput::text(NO_SLOTS_MESSAGE)
            } else {
                ToolOutput::text(message)
            }
        }
        Ok(_) => ToolOutput::error("Error al consultar horarios."),
        Err(e) => ToolOutput::error(format!("Error al consultar horarios: {}", e)),
    }
}

async fn create_reservation(api: &dyn ReservationApi, request: CreateReservationRequest) -> ToolOutput {
    if let Err(e) = request.validate() {
        return ToolOutput::error(format!("Error al crear la reserva: {}", e));
    }

    match api.create_reservation(request).await {
        Ok(envelope) if envelope.success => {
            let data = envelope.data;
            if data.message.is_empty() {
                ToolOutput::text(format!(
                    "Reserva creada exitosamente. ID: {}",
                    data.reservation_id
                ))
            } else {
                ToolOutput::text(data.message)
            }
        }
        Ok(_) => ToolOutput::error("Error al crear la reserva."),
        Err(e) => ToolOutput::error(format!("Error al crear la reserva: {}", e)),
    }
}

/// Runs the tool `name`. Every failure is reported as an error result rather
/// than a protocol error.
pub async fn call_tool(api: &dyn ReservationApi, name: &str, arguments: Option<Value>) -> ToolOutput {
    info!("Calling tool {}", name);

    let output = match name {
        CHECK_SCHEDULE => match parse_arguments(name, arguments) {
            Ok(request) => check_schedule(api, request).await,
            Err(output) => output,
        },
        CREATE_RESERVATION => match parse_arguments(name, arguments) {
            Ok(request) => create_reservation(api, request).await,
            Err(output) => output,
        },
        other => ToolOutput::error(format!("Tool desconocida: {}", other)),
    };

    if output.is_error {
        warn!("Tool {} failed: {}", name, output.text);
    }
    output
}
