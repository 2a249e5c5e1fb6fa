//! SQL de cada backend
//!
//! Las tablas y columnas usan nombres en portugués. Las consultas
//! renombran las columnas a los campos de los modelos para `FromRow`.

pub mod sqlite {
    pub const CREATE_TABLES: &[&str] = &[
        r#"
        CREATE TABLE IF NOT EXISTS motoristas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL,
            telefone TEXT NOT NULL UNIQUE,
            modelo_carro TEXT NOT NULL,
            consumo_medio REAL NOT NULL,
            criado_em TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS custos_operacionais (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            motorista_id INTEGER NOT NULL,
            combustivel_preco_km REAL,
            manutencao_mensal REAL,
            seguro REAL,
            ipva REAL,
            aluguel_carro REAL,
            parcela_financiamento REAL,
            outros_custos REAL,
            criado_em TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (motorista_id) REFERENCES motoristas(id)
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS registros_diarios (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            motorista_id INTEGER NOT NULL,
            data_registro DATE NOT NULL,
            horas_online REAL NOT NULL,
            km_rodados REAL NOT NULL,
            ganho_bruto REAL NOT NULL,
            combustivel_gasto REAL NOT NULL,
            outras_despesas REAL,
            criado_em TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (motorista_id) REFERENCES motoristas(id)
        )
        "#,
    ];

    pub const INSERT_DRIVER: &str =
        "INSERT INTO motoristas (nome, telefone, modelo_carro, consumo_medio) VALUES (?, ?, ?, ?)";

    pub const SELECT_DRIVERS: &str = r#"
        SELECT id, nome AS name, telefone AS phone, modelo_carro AS car_model,
               consumo_medio AS avg_consumption, criado_em AS created_at
        FROM motoristas
        ORDER BY criado_em DESC, id DESC
    "#;

    pub const SELECT_DRIVER_BY_ID: &str = r#"
        SELECT id, nome AS name, telefone AS phone, modelo_carro AS car_model,
               consumo_medio AS avg_consumption, criado_em AS created_at
        FROM motoristas
        WHERE id = ?
    "#;

    pub const INSERT_OPERATING_COST: &str = r#"
        INSERT INTO custos_operacionais
            (motorista_id, combustivel_preco_km, manutencao_mensal, seguro, ipva,
             aluguel_carro, parcela_financiamento, outros_custos)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
    "#;

    pub const INSERT_DAILY_RECORD: &str = r#"
        INSERT INTO registros_diarios
            (motorista_id, data_registro, horas_online, km_rodados, ganho_bruto,
             combustivel_gasto, outras_despesas)
        VALUES (?, ?, ?, ?, ?, ?, ?)
    "#;

    pub const SELECT_DAILY_RECORDS_BY_DRIVER: &str = r#"
        SELECT id, motorista_id AS driver_id, data_registro AS date, horas_online AS hours_online,
               km_rodados AS km_driven, ganho_bruto AS gross_earnings, combustivel_gasto AS fuel_spent,
               outras_despesas AS other_expenses, criado_em AS created_at
        FROM registros_diarios
        WHERE motorista_id = ?
        ORDER BY data_registro DESC, id DESC
    "#;

    pub const SELECT_DAILY_RECORD_BY_DATE: &str = r#"
        SELECT id, motorista_id AS driver_id, data_registro AS date, horas_online AS hours_online,
               km_rodados AS km_driven, ganho_bruto AS gross_earnings, combustivel_gasto AS fuel_spent,
               outras_despesas AS other_expenses, criado_em AS created_at
        FROM registros_diarios
        WHERE motorista_id = ? AND data_registro = ?
        ORDER BY id DESC
        LIMIT 1
    "#;
}

pub mod postgres {
    pub const CREATE_TABLES: &[&str] = &[
        r#"
        CREATE TABLE IF NOT EXISTS motoristas (
            id BIGSERIAL PRIMARY KEY,
            nome TEXT NOT NULL,
            telefone TEXT NOT NULL UNIQUE,
            modelo_carro TEXT NOT NULL,
            consumo_medio DOUBLE PRECISION NOT NULL,
            criado_em TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS custos_operacionais (
            id BIGSERIAL PRIMARY KEY,
            motorista_id BIGINT NOT NULL REFERENCES motoristas(id),
            combustivel_preco_km DOUBLE PRECISION,
            manutencao_mensal DOUBLE PRECISION,
            seguro DOUBLE PRECISION,
            ipva DOUBLE PRECISION,
            aluguel_carro DOUBLE PRECISION,
            parcela_financiamento DOUBLE PRECISION,
            outros_custos DOUBLE PRECISION,
            criado_em TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS registros_diarios (
            id BIGSERIAL PRIMARY KEY,
            motorista_id BIGINT NOT NULL REFERENCES motoristas(id),
            data_registro DATE NOT NULL,
            horas_online DOUBLE PRECISION NOT NULL,
            km_rodados DOUBLE PRECISION NOT NULL,
            ganho_bruto DOUBLE PRECISION NOT NULL,
            combustivel_gasto DOUBLE PRECISION NOT NULL,
            outras_despesas DOUBLE PRECISION,
            criado_em TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ];

    pub const INSERT_DRIVER: &str = r#"
        INSERT INTO motoristas (nome, telefone, modelo_carro, consumo_medio)
        VALUES ($1, $2, $3, $4)
        RETURNING id
    "#;

    pub const SELECT_DRIVERS: &str = r#"
        SELECT id, nome AS name, telefone AS phone, modelo_carro AS car_model,
               consumo_medio AS avg_consumption, criado_em AS created_at
        FROM motoristas
        ORDER BY criado_em DESC, id DESC
    "#;

    pub const SELECT_DRIVER_BY_ID: &str = r#"
        SELECT id, nome AS name, telefone AS phone, modelo_carro AS car_model,
               consumo_medio AS avg_consumption, criado_em AS created_at
        FROM motoristas
        WHERE id = $1
    "#;

    pub const INSERT_OPERATING_COST: &str = r#"
        INSERT INTO custos_operacionais
            (motorista_id, combustivel_preco_km, manutencao_mensal, seguro, ipva,
             aluguel_carro, parcela_financiamento, outros_custos)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
    "#;

    pub const INSERT_DAILY_RECORD: &str = r#"
        INSERT INTO registros_diarios
            (motorista_id, data_registro, horas_online, km_rodados, ganho_bruto,
             combustivel_gasto, outras_despesas)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
    "#;

    pub const SELECT_DAILY_RECORDS_BY_DRIVER: &str = r#"
        SELECT id, motorista_id AS driver_id, data_registro AS date, horas_online AS hours_online,
               km_rodados AS km_driven, ganho_bruto AS gross_earnings, combustivel_gasto AS fuel_spent,
               outras_despesas AS other_expenses, criado_em AS created_at
        FROM registros_diarios
        WHERE motorista_id = $1
        ORDER BY data_registro DESC, id DESC
    "#;

    pub const SELECT_DAILY_RECORD_BY_DATE: &str = r#"
        SELECT id, motorista_id AS driver_id, data_registro AS date, horas_online AS hours_online,
               km_rodados AS km_driven, ganho_bruto AS gross_earnings, combustivel_gasto AS fuel_spent,
               outras_despesas AS other_expenses, criado_em AS created_at
        FROM registros_diarios
        WHERE motorista_id = $1 AND data_registro = $2
        ORDER BY id DESC
        LIMIT 1
    "#;
}
