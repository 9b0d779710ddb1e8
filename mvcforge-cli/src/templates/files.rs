//! Template file contents
//!
//! Variable content is spliced in through context fragments (`connector_import`,
//! `pg_host_read`, `pg_client_args`) that are resolved before rendering, so the
//! bodies themselves carry no conditional logic.

/// Server entry template, dynamic-require style.
pub const SERVER_ENTRY_CJS: &str = r#"// Main server entry (CommonJS)
const express = require('express');
require('dotenv').config();
{{connector_import}}const app = express();
const port = process.env.PORT || 3000;

// Root route
app.get('/', (req, res) => res.send('Server is running!'));

// Start server
app.listen(port, () => console.log('Server started on port ' + port));
"#;

/// Server entry template, declarative-import style.
pub const SERVER_ENTRY_ESM: &str = r#"// Main server entry (ESM)
import express from 'express';
import dotenv from 'dotenv';
{{connector_import}}
dotenv.config();
const app = express();
const port = process.env.PORT || 3000;

// Root route
app.get('/', (req, res) => res.send('Server is running!'));

// Start server
app.listen(port, () => console.log('Server started on port ' + port));
"#;

/// MongoDB connector, dynamic-require style.
pub const DB_MONGO_CJS: &str = r#"// MongoDB connection using Mongoose (CommonJS)
const mongoose = require('mongoose');
const uri = process.env.MONGO_URI;
mongoose.connect(uri, { useNewUrlParser: true, useUnifiedTopology: true })
    .then(() => console.log('MongoDB connected'))
    .catch(err => console.error('MongoDB connection error:', err));
"#;

/// MongoDB connector, declarative-import style.
pub const DB_MONGO_ESM: &str = r#"// MongoDB connection using Mongoose (ESM)
import mongoose from 'mongoose';
import dotenv from 'dotenv';
dotenv.config();
const uri = process.env.MONGO_URI;
mongoose.connect(uri, { useNewUrlParser: true, useUnifiedTopology: true })
    .then(() => console.log('MongoDB connected'))
    .catch(err => console.error('MongoDB connection error:', err));
"#;

/// MySQL connector, dynamic-require style.
pub const DB_MYSQL_CJS: &str = r#"// MySQL connection using mysql2 (CommonJS)
const mysql = require('mysql2');
const url = process.env.MYSQL_URL;
const connection = mysql.createConnection(url);
connection.connect(err => {
    if (err) {
        console.error('MySQL connection error:', err);
    } else {
        console.log('MySQL connected');
    }
});
"#;

/// MySQL connector, declarative-import style.
pub const DB_MYSQL_ESM: &str = r#"// MySQL connection using mysql2 (ESM)
import mysql from 'mysql2';
const url = process.env.MYSQL_URL;
const connection = mysql.createConnection(url);
connection.connect(err => {
    if (err) {
        console.error('MySQL connection error:', err);
    } else {
        console.log('MySQL connected');
    }
});
"#;

/// PostgreSQL connector, dynamic-require style.
pub const DB_POSTGRES_CJS: &str = r#"// PostgreSQL connection using pg (CommonJS)
const { Client } = require('pg');
const url = process.env.PG_URL;
{{pg_host_read}}const client = new Client({{pg_client_args}});
client.connect(err => {
    if (err) {
        console.error('PostgreSQL connection error:', err);
    } else {
        console.log('PostgreSQL connected');
    }
});
"#;

/// PostgreSQL connector, declarative-import style.
pub const DB_POSTGRES_ESM: &str = r#"// PostgreSQL connection using pg (ESM)
import pkg from 'pg';
const { Client } = pkg;
const url = process.env.PG_URL;
{{pg_host_read}}const client = new Client({{pg_client_args}});
client.connect(err => {
    if (err) {
        console.error('PostgreSQL connection error:', err);
    } else {
        console.log('PostgreSQL connected');
    }
});
"#;
